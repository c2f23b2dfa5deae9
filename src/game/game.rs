use super::Player;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Error;

/// A two-player game definition.
///
/// Instances only come out of `Game::try_from(&serde_json::Value)`,
/// which enforces every structural invariant, so downstream code
/// can index utilities without re-checking them.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    players: [Player; 2],
}

impl Game {
    pub(crate) fn new(players: [Player; 2]) -> Self {
        Self { players }
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    /// the player indexing matrix rows
    pub fn row(&self) -> &Player {
        &self.players[0]
    }
    /// the player indexing matrix columns
    pub fn col(&self) -> &Player {
        &self.players[1]
    }
    pub fn names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name().to_string()).collect()
    }
}

impl Serialize for Game {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.players.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Game {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ref document = serde_json::Value::deserialize(deserializer)?;
        Game::try_from(document).map_err(D::Error::custom)
    }
}
