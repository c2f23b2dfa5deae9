criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        parsing_game_definition,
        solving_support_enumeration,
        solving_vertex_enumeration,
        solving_lemke_howson,
        solving_all_equilibria,
        evaluating_outcome_pipeline,
}

fn sampling() -> (Game, Bimatrix) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let bimatrix = Bimatrix::sample(rng);
    (Game::from(&bimatrix), bimatrix)
}

fn parsing_game_definition(c: &mut criterion::Criterion) {
    let (game, _) = sampling();
    let document = serde_json::to_value(&game).expect("serializable game");
    c.bench_function("parse and validate a Game definition", |b| {
        b.iter(|| Game::try_from(&document))
    });
}

fn solving_support_enumeration(c: &mut criterion::Criterion) {
    let (_, bimatrix) = sampling();
    c.bench_function("enumerate supports of a random Bimatrix", |b| {
        b.iter(|| Algorithm::Support.solve(&bimatrix))
    });
}

fn solving_vertex_enumeration(c: &mut criterion::Criterion) {
    let (_, bimatrix) = sampling();
    c.bench_function("enumerate vertices of a random Bimatrix", |b| {
        b.iter(|| Algorithm::Vertex.solve(&bimatrix))
    });
}

fn solving_lemke_howson(c: &mut criterion::Criterion) {
    let (_, bimatrix) = sampling();
    c.bench_function("pivot Lemke-Howson from every label", |b| {
        b.iter(|| Algorithm::LemkeHowson.solve(&bimatrix))
    });
}

fn solving_all_equilibria(c: &mut criterion::Criterion) {
    let (game, bimatrix) = sampling();
    c.bench_function("solve and cross-check all Equilibria", |b| {
        b.iter(|| Equilibria::solve(&game, &bimatrix))
    });
}

fn evaluating_outcome_pipeline(c: &mut criterion::Criterion) {
    let (game, _) = sampling();
    let document = serde_json::to_value(&game).expect("serializable game");
    let outcome = Outcome::from([("Row", "r0"), ("Col", "c0")]);
    c.bench_function("evaluate a definition against an Outcome", |b| {
        b.iter(|| pipeline::evaluate(&document, Some(&outcome)))
    });
}

use bimatrix::game::Game;
use bimatrix::game::Outcome;
use bimatrix::payoff::Bimatrix;
use bimatrix::pipeline;
use bimatrix::solver::Algorithm;
use bimatrix::solver::Equilibria;
use rand::SeedableRng;
use rand::rngs::SmallRng;
