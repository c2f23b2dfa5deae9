use crate::solver::Equilibria;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// One version of an item's game and everything derived from it.
///
/// Passes are snapshots: the `with_*` updates return a new pass and
/// leave the original alone. Keys this crate does not know about are
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pass {
    #[serde(rename = "GameDef", default, skip_serializing_if = "Option::is_none")]
    definition: Option<Value>,
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(rename = "Equilibria", default, skip_serializing_if = "Option::is_none")]
    equilibria: Option<Equilibria>,
    #[serde(
        rename = "Validated",
        default,
        deserialize_with = "truthy",
        skip_serializing_if = "Option::is_none"
    )]
    validated: Option<bool>,
    #[serde(rename = "Feedback", default, skip_serializing_if = "Option::is_none")]
    feedback: Option<String>,
    #[serde(rename = "SemanticFeedback", default, skip_serializing_if = "Option::is_none")]
    semantic: Option<String>,
    #[serde(rename = "OldGame", default, skip_serializing_if = "Option::is_none")]
    old: Option<Value>,
    #[serde(rename = "ProposedGame", default, skip_serializing_if = "Option::is_none")]
    proposed: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// accepts `true`/`false` as well as `"True"`/`"False"`
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) if s == "True" => Some(true),
        Some(Value::String(s)) if s == "False" => Some(false),
        _ => None,
    })
}

impl Pass {
    pub fn new(definition: Value) -> Self {
        Self {
            definition: Some(definition),
            ..Self::default()
        }
    }

    pub fn definition(&self) -> Option<&Value> {
        self.definition.as_ref()
    }
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
    pub fn equilibria(&self) -> Option<&Equilibria> {
        self.equilibria.as_ref()
    }
    pub fn validated(&self) -> Option<bool> {
        self.validated
    }
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }
    pub fn semantic(&self) -> Option<&str> {
        self.semantic.as_deref()
    }
    pub fn old(&self) -> Option<&Value> {
        self.old.as_ref()
    }
    pub fn proposed(&self) -> Option<&Value> {
        self.proposed.as_ref()
    }
    /// a semantic revision replaced an earlier definition
    pub fn is_revision(&self) -> bool {
        self.semantic.is_some() && self.old.is_some()
    }

    pub fn with_error(&self, error: Option<String>) -> Self {
        Self {
            error,
            ..self.clone()
        }
    }
    pub fn with_solution(&self, equilibria: Equilibria, validated: bool) -> Self {
        Self {
            equilibria: Some(equilibria),
            validated: Some(validated),
            ..self.clone()
        }
    }
    pub fn with_feedback(&self, feedback: String) -> Self {
        Self {
            feedback: Some(feedback),
            ..self.clone()
        }
    }
    /// a fresh pass on `definition` that remembers this pass's
    /// definition as the one it replaced
    pub fn revise(&self, definition: Value, comment: String) -> Self {
        Self {
            definition: Some(definition),
            old: self.definition.clone(),
            semantic: Some(comment),
            ..Self::default()
        }
    }
    /// a fresh pass that keeps this pass's definition and records
    /// the candidate that failed validation
    pub fn reject(&self, candidate: Value, comment: String) -> Self {
        Self {
            definition: self.definition.clone(),
            proposed: Some(candidate),
            semantic: Some(comment),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn capitalized() {
        for (raw, parsed) in [
            (json!(true), Some(true)),
            (json!("True"), Some(true)),
            (json!(false), Some(false)),
            (json!("False"), Some(false)),
            (json!("maybe"), None),
        ] {
            let pass = serde_json::from_value::<Pass>(json!({"GameDef": [], "Validated": raw})).unwrap();
            assert_eq!(pass.validated(), parsed);
        }
        let pass = serde_json::from_value::<Pass>(json!({"GameDef": []})).unwrap();
        assert_eq!(pass.validated(), None);
    }

    #[test]
    fn passthrough() {
        let raw = json!({"GameDef": [], "Reviewer": "anon", "Score": 3});
        let pass = serde_json::from_value::<Pass>(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&pass).unwrap(), raw);
    }

    #[test]
    fn snapshots() {
        let pass = Pass::new(json!([]));
        let failed = pass.with_error(Some("broken".to_string()));
        assert_eq!(pass.error(), None);
        assert_eq!(failed.error(), Some("broken"));
        assert_eq!(failed.with_error(None).error(), None);
    }

    #[test]
    fn revisions() {
        let pass = Pass::new(json!(["first"])).with_feedback("None".to_string());
        let revised = pass.revise(json!(["second"]), "rebalance".to_string());
        assert_eq!(revised.definition(), Some(&json!(["second"])));
        assert_eq!(revised.old(), Some(&json!(["first"])));
        assert_eq!(revised.feedback(), None);
        assert!(revised.is_revision());
        let rejected = pass.reject(json!(["third"]), "invalid".to_string());
        assert_eq!(rejected.definition(), Some(&json!(["first"])));
        assert_eq!(rejected.proposed(), Some(&json!(["third"])));
        assert!(!rejected.is_revision());
        let orphan = serde_json::from_value::<Pass>(json!({"GameDef": [], "OldGame": []})).unwrap();
        assert!(!orphan.is_revision());
    }
}
