use crate::classify::Classification;
use crate::classify::Feedback;
use crate::game::Game;
use crate::game::Outcome;
use crate::matching;
use crate::payoff::Bimatrix;
use crate::solver::Equilibria;
use crate::validation::Report;
use serde::Serialize;
use serde_json::Value;

/// Everything learned about one game definition.
/// Later fields are `None` when an earlier stage stopped the game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    report: Report,
    equilibria: Option<Equilibria>,
    classification: Option<Classification>,
    validated: Option<bool>,
}

impl Evaluation {
    pub fn report(&self) -> &Report {
        &self.report
    }
    pub fn equilibria(&self) -> Option<&Equilibria> {
        self.equilibria.as_ref()
    }
    pub fn classification(&self) -> Option<&Classification> {
        self.classification.as_ref()
    }
    pub fn validated(&self) -> Option<bool> {
        self.validated
    }
    pub fn feedback(&self) -> Feedback {
        let error = (!self.report.valid()).then(|| self.report.message());
        Feedback::assess(error, self.equilibria(), self.validated)
    }
}

/// validate, build, solve, classify and match one definition
pub fn evaluate(document: &Value, outcome: Option<&Outcome>) -> Evaluation {
    let parsed = Game::try_from(document).and_then(|game| {
        let bimatrix = Bimatrix::try_from(&game)?;
        Ok((game, bimatrix))
    });
    let (game, bimatrix) = match parsed {
        Ok(pair) => pair,
        Err(ref e) => {
            log::debug!("rejected definition: {}", e);
            return Evaluation {
                report: Report::from(e),
                equilibria: None,
                classification: None,
                validated: None,
            };
        }
    };
    let equilibria = Equilibria::solve(&game, &bimatrix);
    let classification = Classification::from(&equilibria);
    let validated = outcome.map(|outcome| {
        let players = game.names();
        let loose = matching::matches(outcome, equilibria.support(), &players);
        if loose && !matching::coherent(outcome, equilibria.support(), &players) {
            log::warn!(
                "outcome {:?} matches {:?} only across different equilibria",
                outcome,
                players
            );
        }
        loose
    });
    Evaluation {
        report: Report::success(),
        equilibria: Some(equilibria),
        classification: Some(classification),
        validated,
    }
}
