//! Two-player equilibrium engine.
//!
//! Parses bimatrix game documents, solves them three independent ways,
//! cross-checks the solvers and matches observed outcomes against the
//! equilibria that were found.
pub mod classify;
pub mod corpus;
pub mod game;
pub mod matching;
pub mod payoff;
pub mod pipeline;
pub mod solver;
pub mod validation;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(test)]
mod fixtures;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Payoffs and expected values.
pub type Utility = f64;
/// Strategy weights and equilibrium probabilities.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// REPORTING PRECISION
// Equilibria leave the engine rounded, so comparisons across solvers
// happen on the rounded values.
// ============================================================================
/// Decimal places kept on every reported probability.
pub const ROUNDING_DECIMALS: i32 = 2;
/// Tolerance on the sum of an unrounded mixed strategy.
pub const SUM_TOLERANCE: Probability = 1e-6;

// ============================================================================
// NUMERICAL TOLERANCES
// ============================================================================
/// Minimum probability for an action to count as inside a support.
/// Also the slack allowed when comparing best-response payoffs.
pub const SUPPORT_TOLERANCE: Probability = 1e-9;
/// Pivots (in Gaussian elimination and tableaux) smaller than this are zero.
pub const PIVOT_TOLERANCE: f64 = 1e-12;

// ============================================================================
// SOLVER BUDGETS
// Exceeding a budget fails that solver only; the others still run.
// ============================================================================
/// Candidate support pairs examined by support enumeration.
pub const SUPPORT_PAIR_LIMIT: usize = 1 << 20;
/// Constraint bases examined per best-response polytope.
pub const VERTEX_BASIS_LIMIT: usize = 1 << 20;
/// Complementary pivots per dropped label in Lemke-Howson.
pub const LEMKE_PIVOT_LIMIT: usize = 1 << 10;

/// Round to the reporting precision, ties to even, and discard the
/// sign, since solvers can leave negligible negative noise near zero.
pub fn round(p: Probability) -> Probability {
    let scale = 10f64.powi(ROUNDING_DECIMALS);
    ((p * scale).round_ties_even() / scale).abs()
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
