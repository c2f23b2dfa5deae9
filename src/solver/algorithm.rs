use super::AlgorithmFailure;
use super::LemkeHowson;
use super::Point;
use super::SupportEnumeration;
use super::VertexEnumeration;
use crate::payoff::Bimatrix;

/// an equilibrium-finding method over payoff matrices.
pub trait Solver {
    fn algorithm(&self) -> Algorithm;
    fn solve(&self, bimatrix: &Bimatrix) -> Result<Vec<Point>, AlgorithmFailure>;
}

/// The three independent methods, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    Support,
    Vertex,
    LemkeHowson,
}

impl Algorithm {
    pub const fn all() -> [Self; 3] {
        [Self::Support, Self::Vertex, Self::LemkeHowson]
    }
    pub fn solver(&self) -> &'static dyn Solver {
        match self {
            Self::Support => &SupportEnumeration,
            Self::Vertex => &VertexEnumeration,
            Self::LemkeHowson => &LemkeHowson,
        }
    }
    /// solve on normalized payoffs, so results do not depend on payoff scale
    pub fn solve(&self, bimatrix: &Bimatrix) -> Result<Vec<Point>, AlgorithmFailure> {
        self.solver().solve(&bimatrix.normalized())
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Support => write!(f, "Support"),
            Self::Vertex => write!(f, "Vertex"),
            Self::LemkeHowson => write!(f, "Lemke-Howson"),
        }
    }
}
