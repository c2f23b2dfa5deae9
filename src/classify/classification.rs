use super::Verdict;
use crate::game::Profile;
use crate::solver::Equilibria;
use serde::Serialize;
use std::collections::BTreeSet;

/// Cross-check of the three result sets and the degeneracy heuristic.
///
/// Generic bimatrix games have an odd number of equilibria, so an even
/// count, or two complete enumerations disagreeing on the count, marks the
/// game as suspicious. A heuristic only: some degenerate games pass it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    message: String,
    degenerate: bool,
    equilibrium_count: usize,
}

impl Classification {
    pub fn message(&self) -> &str {
        &self.message
    }
    pub fn degenerate(&self) -> bool {
        self.degenerate
    }
    pub fn equilibrium_count(&self) -> usize {
        self.equilibrium_count
    }
    pub fn verdict(&self) -> Verdict {
        match (self.degenerate, self.equilibrium_count) {
            (true, _) => Verdict::Degenerate,
            (false, 1) => Verdict::Unique,
            (false, _) => Verdict::Multiple,
        }
    }

    fn identities(profiles: &[Profile]) -> BTreeSet<String> {
        profiles.iter().map(Profile::canonical).collect()
    }
}

impl From<&Equilibria> for Classification {
    fn from(equilibria: &Equilibria) -> Self {
        let support = Self::identities(equilibria.support());
        let vertex = Self::identities(equilibria.vertex());
        let lemke = Self::identities(equilibria.lemke_howson());
        let mut message = String::new();
        if !(lemke.is_subset(&support) && lemke.is_subset(&vertex)) {
            message.push_str("Equilibrium found in Lemke-Howson that isn't in Support or Vertex. ");
        }
        if support != vertex {
            message.push_str("Equilibria in Support and Vertex not equivalent. ");
        }
        let s = equilibria.support().len();
        let v = equilibria.vertex().len();
        message.push_str(&format!("{} equilibria found in Support. ", s));
        message.push_str(&format!("{} equilibria found in Vertex. ", v));
        Self {
            message,
            degenerate: s % 2 == 0 || s != v,
            equilibrium_count: s,
        }
    }
}
