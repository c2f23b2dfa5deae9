use super::Item;
use super::Pass;
use crate::solver::Equilibria;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// A pass worth keeping: its outcome is an equilibrium and
/// both enumerations found exactly that one equilibrium.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validated {
    #[serde(rename = "Game_Num")]
    index: usize,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Outcome")]
    outcome: Value,
    #[serde(rename = "Game")]
    definition: Value,
    #[serde(rename = "Equilibria")]
    equilibria: Equilibria,
}

impl Validated {
    /// the record for `pass` of the `index`th item, if it qualifies
    pub fn qualify(index: usize, item: &Item, pass: &Pass) -> Option<Self> {
        let equilibria = pass.equilibria()?;
        let definition = pass.definition()?;
        let qualifies = pass.validated() == Some(true)
            && pass.error().is_none()
            && equilibria.support().len() == 1
            && equilibria.vertex().len() == 1;
        qualifies.then(|| Self {
            index,
            description: format!(
                "Background:\n{}\n\nInteraction of interest:\n{}",
                item.article().unwrap_or_default(),
                item.description().unwrap_or_default()
            ),
            outcome: item.outcome().cloned().unwrap_or(Value::Null),
            definition: definition.clone(),
            equilibria: equilibria.clone(),
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn outcome(&self) -> &Value {
        &self.outcome
    }
    pub fn definition(&self) -> &Value {
        &self.definition
    }
    pub fn equilibria(&self) -> &Equilibria {
        &self.equilibria
    }
}
