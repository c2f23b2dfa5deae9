use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// what was actually observed: one action per player.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outcome(BTreeMap<String, String>);

impl Outcome {
    pub fn action(&self, player: &str) -> Option<&str> {
        self.0.get(player).map(String::as_str)
    }
    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Outcome {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs.into_iter().map(|(p, a)| (p.to_string(), a.to_string())).collect()
    }
}

impl FromIterator<(String, String)> for Outcome {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<&serde_json::Value> for Outcome {
    type Error = serde_json::Error;
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        Self::deserialize(value)
    }
}
