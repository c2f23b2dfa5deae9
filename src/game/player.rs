use super::Table;
use serde::Serialize;

/// a named participant with an ordered list of actions and
/// a utility table against the opponent's actions.
///
/// only produced by parsing a game document, so the
/// consistency invariants hold for every instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    name: String,
    actions: Vec<String>,
    utilities: Table,
}

impl Player {
    pub(crate) fn new(name: String, actions: Vec<String>, utilities: Table) -> Self {
        Self {
            name,
            actions,
            utilities,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn actions(&self) -> &[String] {
        &self.actions
    }
    pub fn utilities(&self) -> &Table {
        &self.utilities
    }
}
