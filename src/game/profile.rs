use super::Ordered;
use super::Strategy;
use crate::Probability;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// one mixed strategy per player, keyed by player name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile(Ordered<Strategy>);

impl Profile {
    pub fn strategy(&self, player: &str) -> Option<&Strategy> {
        self.0.get(player)
    }
    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
    pub fn strategies(&self) -> impl Iterator<Item = (&str, &Strategy)> {
        self.0.iter().map(|(name, s)| (name.as_str(), s))
    }
    /// the action this player is most likely to take
    pub fn best_response(&self, player: &str) -> Option<&str> {
        self.strategy(player).and_then(Strategy::best)
    }
    /// sorted serialization, used as the identity of a profile
    /// when comparing results across solvers.
    pub fn canonical(&self) -> String {
        let sorted = self
            .strategies()
            .map(|(name, s)| (name, s.weights().collect::<BTreeMap<&str, Probability>>()))
            .collect::<BTreeMap<_, _>>();
        serde_json::to_string(&sorted).unwrap_or_default()
    }
}

impl FromIterator<(String, Strategy)> for Profile {
    fn from_iter<I: IntoIterator<Item = (String, Strategy)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
