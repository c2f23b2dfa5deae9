/// What kind of equilibrium structure a solved game has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// even count or disagreeing algorithms
    Degenerate,
    Unique,
    Multiple,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Degenerate => write!(f, "degenerate"),
            Self::Unique => write!(f, "unique"),
            Self::Multiple => write!(f, "multiple"),
        }
    }
}
