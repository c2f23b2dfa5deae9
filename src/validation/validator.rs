use super::Report;
use super::StructuralError;
use crate::game::*;
use serde_json::Map;
use serde_json::Value;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Check a raw game document against the schema.
/// the report form of `Game::try_from`.
pub fn validate(document: &Value) -> Report {
    let parsed = Game::try_from(document);
    match parsed {
        Ok(ref game) => log::debug!("valid game {:?}", game.names()),
        Err(ref e) => log::debug!("invalid game: {}", e),
    }
    Report::from(&parsed)
}

/// a player record that has the right field types,
/// before any of its utilities have been looked at.
struct Shape<'a> {
    name: &'a str,
    actions: Vec<&'a str>,
    utilities: &'a Map<String, Value>,
}

impl<'a> Shape<'a> {
    fn parse(index: usize, record: &'a Value) -> Result<Self, StructuralError> {
        let malformed = || StructuralError::MalformedPlayer(index);
        let record = record.as_object().ok_or_else(malformed)?;
        let name = record
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(malformed)?;
        let actions = record
            .get("actions")
            .and_then(Value::as_array)
            .ok_or_else(malformed)?
            .iter()
            .map(Value::as_str)
            .collect::<Option<Vec<&str>>>()
            .ok_or_else(malformed)?;
        let utilities = record
            .get("utilities")
            .and_then(Value::as_object)
            .ok_or_else(malformed)?;
        let shape = Self {
            name,
            actions,
            utilities,
        };
        shape.distinct()?;
        shape.covered()?;
        Ok(shape)
    }

    fn distinct(&self) -> Result<(), StructuralError> {
        if self.actions.is_empty() {
            return Err(StructuralError::NoActions(self.name.to_string()));
        }
        let mut seen = BTreeSet::new();
        match self.actions.iter().find(|a| !seen.insert(**a)) {
            Some(action) => Err(StructuralError::DuplicateAction {
                player: self.name.to_string(),
                action: action.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// utilities are keyed by exactly the declared actions
    fn covered(&self) -> Result<(), StructuralError> {
        let declared = self.actions.iter().copied().collect::<BTreeSet<&str>>();
        let defined = self
            .utilities
            .keys()
            .map(String::as_str)
            .collect::<BTreeSet<&str>>();
        if declared == defined {
            Ok(())
        } else {
            Err(StructuralError::UndeclaredActions {
                player: self.name.to_string(),
                utilities: defined.into_iter().map(String::from).collect(),
                actions: self.actions.iter().map(|a| a.to_string()).collect(),
            })
        }
    }

    /// every cell is a record with a numeric utility
    fn table(&self) -> Result<Table, StructuralError> {
        let mut table = BTreeMap::new();
        for action in self.actions.iter().copied() {
            let responses = self
                .utilities
                .get(action)
                .and_then(Value::as_object)
                .ok_or_else(|| StructuralError::MalformedAction {
                    player: self.name.to_string(),
                    action: action.to_string(),
                })?;
            let mut row = BTreeMap::new();
            for (response, cell) in responses {
                let cell = cell
                    .as_object()
                    .ok_or_else(|| StructuralError::MalformedResponse {
                        player: self.name.to_string(),
                        action: action.to_string(),
                        response: response.clone(),
                    })?;
                let utility = cell
                    .get("utility")
                    .and_then(Value::as_f64)
                    .ok_or_else(|| StructuralError::NonNumeric {
                        player: self.name.to_string(),
                        action: action.to_string(),
                        response: response.clone(),
                    })?;
                let outcome = cell
                    .get("outcome")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                row.insert(response.clone(), Entry::new(outcome, utility));
            }
            table.insert(action.to_string(), row);
        }
        Ok(Table::from(table))
    }

    /// the response set shared by all of this player's actions
    fn responses<'t>(&self, table: &'t Table) -> Result<BTreeSet<&'t str>, StructuralError> {
        let mut sets = self.actions.iter().map(|a| table.responses(a));
        let first = sets.next().unwrap_or_default();
        if sets.all(|set| set == first) {
            Ok(first)
        } else {
            Err(StructuralError::UnequalResponses(self.name.to_string()))
        }
    }
}

impl TryFrom<&Value> for Game {
    type Error = StructuralError;
    fn try_from(document: &Value) -> Result<Self, Self::Error> {
        let records = document.as_array().ok_or(StructuralError::NotAList)?;
        match records.len() {
            n if n < 2 => return Err(StructuralError::TooFewPlayers(n)),
            n if n > 2 => return Err(StructuralError::TooManyPlayers(n)),
            _ => {}
        }
        let shapes = records
            .iter()
            .enumerate()
            .map(|(i, record)| Shape::parse(i, record))
            .collect::<Result<Vec<Shape>, _>>()?;
        if shapes[0].name == shapes[1].name {
            return Err(StructuralError::DuplicatePlayer(shapes[0].name.to_string()));
        }
        let tables = shapes
            .iter()
            .map(Shape::table)
            .collect::<Result<Vec<Table>, _>>()?;
        let responses = shapes
            .iter()
            .zip(tables.iter())
            .map(|(shape, table)| shape.responses(table))
            .collect::<Result<Vec<BTreeSet<&str>>, _>>()?;
        for (i, j) in [(0, 1), (1, 0)] {
            let (shape, other) = (&shapes[i], &shapes[j]);
            let actions = other.actions.iter().copied().collect::<BTreeSet<&str>>();
            if responses[i] != actions {
                return Err(StructuralError::MismatchedResponses {
                    player: shape.name.to_string(),
                    other: other.name.to_string(),
                    responses: responses[i].iter().map(|r| r.to_string()).collect(),
                    actions: other.actions.iter().map(|a| a.to_string()).collect(),
                });
            }
        }
        let mut players = shapes.iter().zip(tables).map(|(shape, table)| {
            Player::new(
                shape.name.to_string(),
                shape.actions.iter().map(|a| a.to_string()).collect(),
                table,
            )
        });
        match (players.next(), players.next()) {
            (Some(row), Some(col)) => Ok(Game::new([row, col])),
            _ => Err(StructuralError::PlayerCount(shapes.len())),
        }
    }
}

impl TryFrom<Value> for Game {
    type Error = StructuralError;
    fn try_from(document: Value) -> Result<Self, Self::Error> {
        Game::try_from(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use serde_json::json;

    fn rejects(document: Value, fragment: &str) {
        let report = validate(&document);
        assert!(!report.valid());
        assert!(
            report.message().contains(fragment),
            "{:?} does not mention {:?}",
            report.message(),
            fragment
        );
    }

    #[test]
    fn wellformed() {
        let report = validate(&fixtures::prisoners_dilemma());
        assert!(report.valid());
        assert_eq!(report.message(), Report::SUCCESS);
    }

    #[test]
    fn integers() {
        let game = Game::try_from(&fixtures::coordination()).unwrap();
        assert_eq!(game.row().utilities().utility("A", "A"), Some(1.0));
        assert_eq!(game.col().utilities().utility("B", "A"), Some(0.0));
    }

    #[test]
    fn unlisted() {
        rejects(json!({"name": "Lion"}), "must be a list");
    }

    #[test]
    fn solitary() {
        let doc = fixtures::prisoners_dilemma();
        rejects(json!([doc[0].clone()]), "two players required");
        rejects(json!([]), "two players required");
    }

    #[test]
    fn crowded() {
        let doc = fixtures::prisoners_dilemma();
        rejects(
            json!([doc[0].clone(), doc[1].clone(), doc[1].clone()]),
            "2-player games",
        );
    }

    #[test]
    fn shapeless() {
        let doc = fixtures::prisoners_dilemma();
        rejects(json!([doc[0].clone(), "P2"]), "player #1");
        rejects(
            json!([doc[0].clone(), {"name": "P2", "actions": "Defect", "utilities": {}}]),
            "player #1",
        );
    }

    #[test]
    fn actionless() {
        let doc = fixtures::prisoners_dilemma();
        rejects(
            json!([doc[0].clone(), {"name": "P2", "actions": [], "utilities": {}}]),
            "at least one action",
        );
    }

    #[test]
    fn repeated() {
        let mut doc = fixtures::prisoners_dilemma();
        doc[1]["actions"] = json!(["Cooperate", "Cooperate"]);
        rejects(doc, "more than once");
    }

    #[test]
    fn homonyms() {
        let mut doc = fixtures::prisoners_dilemma();
        doc[1]["name"] = json!("P1");
        rejects(doc, "both players are named 'P1'");
    }

    #[test]
    fn undeclared() {
        let mut doc = fixtures::prisoners_dilemma();
        doc[0]["actions"] = json!(["Cooperate"]);
        rejects(doc, "declares actions");
    }

    #[test]
    fn textual() {
        let mut doc = fixtures::prisoners_dilemma();
        doc[0]["utilities"]["Defect"]["Cooperate"]["utility"] = json!("five");
        rejects(
            doc,
            "utility for P1 action 'Defect' given response 'Cooperate' must be numeric",
        );
    }

    #[test]
    fn boolean() {
        let mut doc = fixtures::prisoners_dilemma();
        doc[1]["utilities"]["Cooperate"]["Defect"]["utility"] = json!(true);
        rejects(doc, "must be numeric");
    }

    #[test]
    fn missing() {
        let mut doc = fixtures::prisoners_dilemma();
        doc[0]["utilities"]["Cooperate"]["Defect"] = json!({"outcome": "sucker"});
        rejects(doc, "must be numeric");
    }

    #[test]
    fn flat() {
        let mut doc = fixtures::prisoners_dilemma();
        doc[0]["utilities"]["Cooperate"] = json!(3);
        rejects(doc, "action 'Cooperate' for P1 must be a dict");
        let mut doc = fixtures::prisoners_dilemma();
        doc[0]["utilities"]["Cooperate"]["Defect"] = json!(0);
        rejects(doc, "response 'Defect' for P1 action 'Cooperate' must be a dict");
    }

    #[test]
    fn uneven() {
        let mut doc = fixtures::prisoners_dilemma();
        doc[0]["utilities"]["Cooperate"]
            .as_object_mut()
            .unwrap()
            .remove("Defect");
        rejects(doc, "Not all responses equivalent across actions for player P1");
    }

    #[test]
    fn mismatched() {
        let doc = json!([
            {
                "name": "A",
                "actions": ["Fight"],
                "utilities": {
                    "Fight": {
                        "Flee": {"outcome": "win", "utility": 2},
                        "Stay": {"outcome": "brawl", "utility": -1}
                    }
                }
            },
            {
                "name": "B",
                "actions": ["Flee", "Run"],
                "utilities": {
                    "Flee": {"Fight": {"outcome": "lose", "utility": 0}},
                    "Run": {"Fight": {"outcome": "escape", "utility": 1}}
                }
            }
        ]);
        let report = validate(&doc);
        assert!(!report.valid());
        assert!(report.message().contains("Player A's responses do not match the actions of B"));
        assert!(report.message().contains("\"Stay\""));
        assert!(report.message().contains("\"Run\""));
    }

    #[test]
    fn shortfall() {
        let mut doc = fixtures::prisoners_dilemma();
        doc[1]["actions"] = json!(["Cooperate", "Defect", "Abstain"]);
        doc[1]["utilities"]["Abstain"] = json!({
            "Cooperate": {"outcome": "", "utility": 0},
            "Defect": {"outcome": "", "utility": 0}
        });
        rejects(doc, "Player P1's responses do not match the actions of P2");
    }

    #[test]
    fn deserialized() {
        let game = serde_json::from_value::<Game>(fixtures::prisoners_dilemma()).unwrap();
        assert_eq!(game.names(), vec!["P1", "P2"]);
        assert!(serde_json::from_value::<Game>(json!([])).is_err());
    }
}
