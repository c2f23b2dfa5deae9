use super::Density;
use super::Ordered;
use crate::Probability;
use serde::Deserialize;
use serde::Serialize;

/// a mixed strategy: probability per action, in declared action order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Strategy(Ordered<Probability>);

impl Strategy {
    pub fn weights(&self) -> impl Iterator<Item = (&str, Probability)> {
        self.0.iter().map(|(a, p)| (a.as_str(), *p))
    }
    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
    pub fn total(&self) -> Probability {
        self.0.values().sum()
    }
    /// non-negative weights summing to one.
    /// only guaranteed before rounding.
    pub fn is_distribution(&self) -> bool {
        self.0.values().all(|p| *p >= 0.)
            && (self.total() - 1.).abs() <= crate::SUM_TOLERANCE
    }
    /// the most likely action. ties go to the
    /// action declared first.
    pub fn best(&self) -> Option<&str> {
        self.weights()
            .fold(None, |best, (action, p)| match best {
                Some((_, q)) if q >= p => best,
                _ => Some((action, p)),
            })
            .map(|(action, _)| action)
    }
}

impl Density for Strategy {
    type S = str;
    fn density(&self, action: &str) -> Probability {
        self.0.get(action).copied().unwrap_or(0.)
    }
    fn support(&self) -> impl Iterator<Item = &str> {
        self.weights().filter(|(_, p)| *p > 0.).map(|(a, _)| a)
    }
}

impl FromIterator<(String, Probability)> for Strategy {
    fn from_iter<I: IntoIterator<Item = (String, Probability)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
