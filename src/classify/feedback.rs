use super::Classification;
use super::Verdict;
use crate::solver::Equilibria;

/// Something the feedback stage noticed about one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finding {
    /// the definition never made it past validation
    TechnicalError,
    Degenerate,
    SingleEquilibrium,
    MultipleEquilibria,
    /// the observed outcome is no one's best response
    OffEquilibrium,
}

/// Diagnostic text handed back to whoever authors the game,
/// together with the findings behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    findings: Vec<Finding>,
    text: String,
}

impl Feedback {
    /// nothing to fix
    pub const NONE: &'static str = "None";
    pub const DEGENERATE: &'static str = "The game might be degenerate. Check if one or both players are indifferent to their strategies. ";
    pub const MULTIPLE: &'static str =
        "The game has multiple equilibria. A game with a more definite outcome would be better. ";
    pub const OFF_EQUILIBRIUM: &'static str =
        "The naturally observed outcome of the interaction is not an equilibrium in the game! ";

    /// `error` only counts when nothing was solved; degeneracy
    /// only matters once the outcome has been validated.
    pub fn assess(
        error: Option<&str>,
        equilibria: Option<&Equilibria>,
        validated: Option<bool>,
    ) -> Self {
        let mut findings = Vec::new();
        let mut text = String::new();
        if let (Some(error), None) = (error, equilibria) {
            findings.push(Finding::TechnicalError);
            text.push_str(&format!("Technical errors: {}", error));
        }
        match (equilibria, validated) {
            (Some(equilibria), Some(true)) => {
                match Classification::from(equilibria).verdict() {
                    Verdict::Degenerate => {
                        findings.push(Finding::Degenerate);
                        text.push_str(Self::DEGENERATE);
                    }
                    Verdict::Multiple => {
                        findings.push(Finding::MultipleEquilibria);
                        text.push_str(Self::MULTIPLE);
                    }
                    Verdict::Unique => {
                        findings.push(Finding::SingleEquilibrium);
                        text = Self::NONE.to_string();
                    }
                }
            }
            (Some(_), Some(false)) => {
                findings.push(Finding::OffEquilibrium);
                text.push_str(Self::OFF_EQUILIBRIUM);
            }
            _ => {}
        }
        if text.is_empty() {
            text = Self::NONE.to_string();
        }
        Self { findings, text }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }
    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn is_none(&self) -> bool {
        self.text == Self::NONE
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Profile;
    use serde_json::json;

    fn solved(count: usize) -> Equilibria {
        let profiles = (0..count)
            .map(|i| {
                let p = i as f64 / 10.;
                serde_json::from_value::<Profile>(json!({
                    "Ant": {"March": p, "Rest": 1. - p},
                    "Beetle": {"Roll": 1.0}
                }))
                .unwrap()
            })
            .collect::<Vec<_>>();
        Equilibria::new(profiles.clone(), profiles, Vec::new(), String::new())
    }

    #[test]
    fn quiet() {
        let f = Feedback::assess(None, Some(&solved(1)), Some(true));
        assert_eq!(f.text(), "None");
        assert_eq!(f.findings(), &[Finding::SingleEquilibrium]);
        assert!(Feedback::assess(None, None, None).is_none());
    }

    #[test]
    fn technical() {
        let f = Feedback::assess(Some("Only 2-player games supported."), None, None);
        assert_eq!(f.text(), "Technical errors: Only 2-player games supported.");
        assert_eq!(f.findings(), &[Finding::TechnicalError]);
    }

    #[test]
    fn stale() {
        // an error left beside equilibria is not reported
        let f = Feedback::assess(Some("stale"), Some(&solved(1)), Some(true));
        assert!(f.is_none());
    }

    #[test]
    fn degenerate() {
        let f = Feedback::assess(None, Some(&solved(2)), Some(true));
        assert_eq!(f.text(), Feedback::DEGENERATE);
        assert_eq!(f.findings(), &[Finding::Degenerate]);
        // degeneracy is not reported when the outcome already failed
        let f = Feedback::assess(None, Some(&solved(2)), Some(false));
        assert_eq!(f.findings(), &[Finding::OffEquilibrium]);
    }

    #[test]
    fn multiple() {
        let f = Feedback::assess(None, Some(&solved(3)), Some(true));
        assert_eq!(f.text(), Feedback::MULTIPLE);
    }

    #[test]
    fn unobserved() {
        let f = Feedback::assess(None, Some(&solved(1)), Some(false));
        assert!(f.text().contains("naturally observed outcome"));
        assert!(f.text().contains("not an equilibrium"));
        assert!(!f.is_none());
    }
}
