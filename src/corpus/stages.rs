use super::Item;
use super::Pass;
use super::Stats;
use super::Validated;
use crate::classify::Feedback;
use crate::game::Outcome;
use crate::pipeline;
use crate::validation;

/// Structural validation of every pass. Failing passes get an
/// `Error`; passing ones lose any stale `Error`.
pub fn validate(items: &[Item]) -> Vec<Item> {
    let validated = each(items, |_, item| item.map_passes(check));
    let errors = validated
        .iter()
        .flat_map(|item| item.passes().unwrap_or_default())
        .filter(|pass| pass.error().is_some())
        .count();
    log::info!("validated {} items, {} passes with errors", items.len(), errors);
    validated
}

/// Solve every error-free pass and match the item's outcome
/// against the support enumeration equilibria.
pub fn solve(items: &[Item]) -> Vec<Item> {
    let solved = each(items, |_, item| item.map_passes(|pass| settle(item, pass)));
    let matched = solved
        .iter()
        .flat_map(|item| item.passes().unwrap_or_default())
        .filter(|pass| pass.validated() == Some(true))
        .count();
    log::info!("solved {} items, outcome in equilibrium in {} passes", items.len(), matched);
    solved
}

/// Attach feedback to pass `index` of every item and tally the category.
pub fn feedback(items: &[Item], index: usize) -> (Vec<Item>, Stats) {
    let (items, stats) = each(items, |_, item| judge(item, index))
        .into_iter()
        .unzip::<Item, Stats, Vec<Item>, Vec<Stats>>();
    let stats = stats.into_iter().sum::<Stats>();
    log::info!("feedback on pass {}: {:?}", index, stats);
    (items, stats)
}

/// Every pass that qualifies as a validated single-equilibrium game.
pub fn collect(items: &[Item]) -> Vec<Validated> {
    let validated = items
        .iter()
        .enumerate()
        .flat_map(|(i, item)| {
            item.passes()
                .unwrap_or_default()
                .iter()
                .filter_map(move |pass| Validated::qualify(i, item, pass))
        })
        .collect::<Vec<Validated>>();
    log::info!("collected {} validated games", validated.len());
    validated
}

/// validate, solve, then feedback on pass `index`
pub fn run(items: &[Item], index: usize) -> (Vec<Item>, Stats) {
    feedback(&solve(&validate(items)), index)
}

fn check(pass: &Pass) -> Pass {
    match pass.definition().map(validation::validate) {
        None => pass.clone(),
        Some(report) if report.valid() => pass.with_error(None),
        Some(report) => pass.with_error(Some(report.message().to_string())),
    }
}

fn settle(item: &Item, pass: &Pass) -> Pass {
    let Some(definition) = pass.definition() else {
        return pass.clone();
    };
    if pass.error().is_some() {
        return pass.clone();
    }
    let outcome = item.outcome().and_then(|value| match Outcome::try_from(value) {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            log::warn!("unreadable outcome {}: {}", value, e);
            None
        }
    });
    let evaluation = pipeline::evaluate(definition, outcome.as_ref());
    match evaluation.equilibria() {
        Some(equilibria) => {
            pass.with_solution(equilibria.clone(), evaluation.validated().unwrap_or(false))
        }
        None => pass.with_error(Some(evaluation.report().message().to_string())),
    }
}

fn judge(item: &Item, index: usize) -> (Item, Stats) {
    let mut stats = Stats::default();
    let Some(passes) = item.passes() else {
        match item.has_failed_article() {
            true => stats.failed_article += 1,
            false => stats.failed_gamegen += 1,
        }
        return (item.clone(), stats);
    };
    let Some(pass) = passes.get(index) else {
        return (item.clone(), stats);
    };
    stats.total += 1;
    let feedback = match pass.definition() {
        None => {
            stats.failed_gamegen += 1;
            Feedback::NONE.to_string()
        }
        Some(_) => {
            if pass.is_revision() {
                stats.semantic_update += 1;
            }
            let feedback = Feedback::assess(pass.error(), pass.equilibria(), pass.validated());
            for finding in feedback.findings() {
                stats.record(*finding);
            }
            feedback.text().to_string()
        }
    };
    (item.map_pass(index, |p| p.with_feedback(feedback)), stats)
}

/// map items in parallel, keeping their order
#[cfg(feature = "cli")]
fn each<T, F>(items: &[Item], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize, &Item) -> T + Sync + Send,
{
    use rayon::prelude::*;
    items
        .par_iter()
        .enumerate()
        .map(|(i, item)| f(i, item))
        .collect()
}

#[cfg(not(feature = "cli"))]
fn each<T, F>(items: &[Item], f: F) -> Vec<T>
where
    F: Fn(usize, &Item) -> T,
{
    items
        .iter()
        .enumerate()
        .map(|(i, item)| f(i, item))
        .collect()
}
