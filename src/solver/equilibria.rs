use super::Algorithm;
use crate::classify::Classification;
use crate::game::Game;
use crate::game::Profile;
use crate::payoff::Bimatrix;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeSet;

/// Every equilibrium each algorithm found, plus diagnostics.
///
/// Serializes with the field names downstream consumers already read,
/// including the historical `LemkeHawson` spelling.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Equilibria {
    #[serde(rename = "Support", default)]
    support: Vec<Profile>,
    #[serde(rename = "Vertex", default)]
    vertex: Vec<Profile>,
    #[serde(rename = "LemkeHawson", default)]
    lemke_howson: Vec<Profile>,
    #[serde(rename = "Comments", default)]
    comments: String,
}

impl Equilibria {
    /// run all three algorithms, isolating failures, then cross-check.
    pub fn solve(game: &Game, bimatrix: &Bimatrix) -> Self {
        let mut comments = String::new();
        let mut run = |algorithm: Algorithm| match algorithm.solve(bimatrix) {
            Ok(points) => points
                .iter()
                .map(|point| Profile::from((game, point)))
                .collect::<Vec<Profile>>(),
            Err(e) => {
                log::warn!("{} failed on {:?}: {}", algorithm, game.names(), e);
                comments.push_str(&format!("{} algorithm failed: {}. ", algorithm, e));
                Vec::new()
            }
        };
        let support = run(Algorithm::Support);
        let vertex = run(Algorithm::Vertex);
        let lemke_howson = Self::distinct(run(Algorithm::LemkeHowson));
        let mut equilibria = Self {
            support,
            vertex,
            lemke_howson,
            comments,
        };
        let classification = Classification::from(&equilibria);
        equilibria.comments.push_str(classification.message());
        log::debug!("{:?}: {}", game.names(), equilibria.comments);
        equilibria
    }

    /// drop repeats by rounded value, first found wins
    fn distinct(profiles: Vec<Profile>) -> Vec<Profile> {
        let mut seen = BTreeSet::new();
        profiles
            .into_iter()
            .filter(|p| seen.insert(p.canonical()))
            .collect()
    }

    pub fn new(
        support: Vec<Profile>,
        vertex: Vec<Profile>,
        lemke_howson: Vec<Profile>,
        comments: String,
    ) -> Self {
        Self {
            support,
            vertex,
            lemke_howson,
            comments,
        }
    }
    pub fn support(&self) -> &[Profile] {
        &self.support
    }
    pub fn vertex(&self) -> &[Profile] {
        &self.vertex
    }
    pub fn lemke_howson(&self) -> &[Profile] {
        &self.lemke_howson
    }
    pub fn comments(&self) -> &str {
        &self.comments
    }
}
