/// Why a single algorithm gave up on a game.
///
/// Never fatal to the game itself: the other algorithms still run
/// and the failure becomes a sentence in the equilibria comments.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlgorithmFailure {
    #[error("search space of {size} candidates exceeds the limit of {limit}")]
    Exhausted { size: usize, limit: usize },
    #[error("no equilibrium reached from label {label} after {pivots} pivots")]
    Cycling { label: usize, pivots: usize },
    #[error("entering label {label} has no blocking constraint")]
    Unbounded { label: usize },
    #[error("path from label {label} ended at the artificial equilibrium")]
    Vanishing { label: usize },
}
