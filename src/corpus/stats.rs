use crate::classify::Finding;
use serde::Deserialize;
use serde::Serialize;

/// Per-category tally from the feedback stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    #[serde(rename = "Total")]
    pub total: usize,
    #[serde(rename = "Failed_Article")]
    pub failed_article: usize,
    #[serde(rename = "Failed_GameGen")]
    pub failed_gamegen: usize,
    #[serde(rename = "Syntactic_Error")]
    pub syntactic_error: usize,
    #[serde(rename = "Semantic_Update")]
    pub semantic_update: usize,
    #[serde(rename = "Outcome_not_in_Equilibrium")]
    pub off_equilibrium: usize,
    #[serde(rename = "Outcome_in_Equilibrium_but_Degenerate")]
    pub degenerate: usize,
    #[serde(rename = "Valid_NonDegenerate_Total")]
    pub valid: usize,
    #[serde(rename = "Valid_Single_Equilibrium")]
    pub single: usize,
    #[serde(rename = "Valid_Multiple_Equilibria")]
    pub multiple: usize,
}

impl Stats {
    pub fn record(&mut self, finding: Finding) {
        match finding {
            Finding::TechnicalError => self.syntactic_error += 1,
            Finding::Degenerate => self.degenerate += 1,
            Finding::OffEquilibrium => self.off_equilibrium += 1,
            Finding::SingleEquilibrium => {
                self.valid += 1;
                self.single += 1;
            }
            Finding::MultipleEquilibria => {
                self.valid += 1;
                self.multiple += 1;
            }
        }
    }
}

impl std::ops::AddAssign for Stats {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.failed_article += other.failed_article;
        self.failed_gamegen += other.failed_gamegen;
        self.syntactic_error += other.syntactic_error;
        self.semantic_update += other.semantic_update;
        self.off_equilibrium += other.off_equilibrium;
        self.degenerate += other.degenerate;
        self.valid += other.valid;
        self.single += other.single;
        self.multiple += other.multiple;
    }
}

impl std::iter::Sum for Stats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, s| {
            acc += s;
            acc
        })
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = [
            ("total", self.total),
            ("failed article", self.failed_article),
            ("failed generation", self.failed_gamegen),
            ("syntactic error", self.syntactic_error),
            ("semantic update", self.semantic_update),
            ("outcome not in equilibrium", self.off_equilibrium),
            ("degenerate", self.degenerate),
            ("valid", self.valid),
            ("  single equilibrium", self.single),
            ("  multiple equilibria", self.multiple),
        ];
        for (label, count) in rows {
            writeln!(f, "{:<28}{:>6}", label, count)?;
        }
        Ok(())
    }
}
