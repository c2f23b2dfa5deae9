use super::Pass;
use crate::validation;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// One described interaction within a category.
///
/// `Game` is absent when authoring never produced a definition and
/// otherwise holds every pass in order, oldest first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "Article", default, skip_serializing_if = "Option::is_none")]
    article: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "Outcome", default, skip_serializing_if = "Option::is_none")]
    outcome: Option<Value>,
    #[serde(rename = "Game", default, skip_serializing_if = "Option::is_none")]
    passes: Option<Vec<Pass>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Item {
    /// marker left in `Article` when no source article could be found
    pub const MISSING_ARTICLE: &'static str = "Error";

    pub fn new(article: &str, description: &str, outcome: Value) -> Self {
        Self {
            article: Some(article.to_string()),
            description: Some(description.to_string()),
            outcome: Some(outcome),
            ..Self::default()
        }
    }

    pub fn article(&self) -> Option<&str> {
        self.article.as_deref()
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub fn outcome(&self) -> Option<&Value> {
        self.outcome.as_ref()
    }
    pub fn passes(&self) -> Option<&[Pass]> {
        self.passes.as_deref()
    }
    pub fn pass(&self, index: usize) -> Option<&Pass> {
        self.passes().and_then(|passes| passes.get(index))
    }
    pub fn latest(&self) -> Option<&Pass> {
        self.passes().and_then(|passes| passes.last())
    }
    pub fn has_failed_article(&self) -> bool {
        self.article() == Some(Self::MISSING_ARTICLE)
    }

    /// a copy with every pass rewritten by `f`
    pub fn map_passes<F: Fn(&Pass) -> Pass>(&self, f: F) -> Self {
        Self {
            passes: self.passes.as_ref().map(|p| p.iter().map(&f).collect()),
            ..self.clone()
        }
    }
    /// a copy with pass `index` rewritten by `f`
    pub fn map_pass<F: FnOnce(&Pass) -> Pass>(&self, index: usize, f: F) -> Self {
        let mut passes = self.passes.clone();
        if let Some(pass) = passes.as_mut().and_then(|p| p.get_mut(index)) {
            *pass = f(pass);
        }
        Self {
            passes,
            ..self.clone()
        }
    }
    /// a copy with `pass` appended to the history
    pub fn refine(&self, pass: Pass) -> Self {
        let mut passes = self.passes.clone().unwrap_or_default();
        passes.push(pass);
        Self {
            passes: Some(passes),
            ..self.clone()
        }
    }

    /// Fold a semantically revised candidate into the history.
    ///
    /// A structurally valid candidate becomes the definition of a new pass
    /// that records the one it replaced. An invalid one is kept on a new
    /// pass as `ProposedGame` beside the unchanged definition.
    pub fn propose(&self, candidate: Value, comment: &str) -> Self {
        let Some(latest) = self.latest() else {
            return self.refine(Pass::new(candidate));
        };
        let report = validation::validate(&candidate);
        match report.valid() {
            true => self.refine(latest.revise(candidate, comment.to_string())),
            false => self.refine(latest.reject(
                candidate,
                format!("New proposed game was not formally valid: {}", report.message()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use serde_json::json;

    fn item() -> Item {
        Item::new("Foxes hunt.", "A fox meets a hare.", json!({"P1": "Defect"}))
            .refine(Pass::new(fixtures::prisoners_dilemma()))
    }

    #[test]
    fn wire() {
        let raw = json!({
            "Article": "Foxes hunt.",
            "Description": "A fox meets a hare.",
            "Outcome": {"Fox": "Chase"},
            "Game": [{"GameDef": []}],
            "Source": "field notes"
        });
        let item = serde_json::from_value::<Item>(raw.clone()).unwrap();
        assert_eq!(item.passes().map(<[Pass]>::len), Some(1));
        assert_eq!(serde_json::to_value(&item).unwrap(), raw);
    }

    #[test]
    fn ungenerated() {
        let item = serde_json::from_value::<Item>(json!({"Article": "Error"})).unwrap();
        assert!(item.has_failed_article());
        assert!(item.passes().is_none());
        assert!(item.latest().is_none());
    }

    #[test]
    fn accepted() {
        let before = item();
        let after = before.propose(fixtures::hawk_dove(), "make it a contest");
        assert_eq!(before.passes().map(<[Pass]>::len), Some(1));
        assert_eq!(after.passes().map(<[Pass]>::len), Some(2));
        let latest = after.latest().unwrap();
        assert_eq!(latest.definition(), Some(&fixtures::hawk_dove()));
        assert_eq!(latest.old(), Some(&fixtures::prisoners_dilemma()));
        assert_eq!(latest.semantic(), Some("make it a contest"));
    }

    #[test]
    fn rejected() {
        let after = item().propose(json!({"name": "Fox"}), "make it a contest");
        let latest = after.latest().unwrap();
        assert_eq!(latest.definition(), Some(&fixtures::prisoners_dilemma()));
        assert_eq!(latest.proposed(), Some(&json!({"name": "Fox"})));
        assert_eq!(
            latest.semantic(),
            Some("New proposed game was not formally valid: Invalid game data structure: must be a list.")
        );
    }

    #[test]
    fn targeted() {
        let item = item().refine(Pass::new(json!([])));
        let updated = item.map_pass(1, |p| p.with_feedback("None".to_string()));
        assert_eq!(updated.pass(0).unwrap().feedback(), None);
        assert_eq!(updated.pass(1).unwrap().feedback(), Some("None"));
        assert_eq!(item.map_pass(5, |p| p.clone()), item);
    }
}
