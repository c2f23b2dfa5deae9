use crate::Utility;
use serde::Deserialize;
use serde::Serialize;

/// one cell of a utility table: what happens, and what it is worth
/// to the player who owns the table. the description never enters
/// the numerics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    outcome: String,
    utility: Utility,
}

impl Entry {
    pub fn new(outcome: String, utility: Utility) -> Self {
        Self { outcome, utility }
    }
    pub fn outcome(&self) -> &str {
        &self.outcome
    }
    pub fn utility(&self) -> Utility {
        self.utility
    }
}
