use super::Entry;
use crate::Utility;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// own action -> opponent response -> entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Table(BTreeMap<String, BTreeMap<String, Entry>>);

impl Table {
    pub fn entry(&self, action: &str, response: &str) -> Option<&Entry> {
        self.0.get(action).and_then(|row| row.get(response))
    }
    pub fn utility(&self, action: &str, response: &str) -> Option<Utility> {
        self.entry(action, response).map(Entry::utility)
    }
    /// response labels declared under one of our actions
    pub fn responses(&self, action: &str) -> BTreeSet<&str> {
        self.0
            .get(action)
            .map(|row| row.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

impl From<BTreeMap<String, BTreeMap<String, Entry>>> for Table {
    fn from(inner: BTreeMap<String, BTreeMap<String, Entry>>) -> Self {
        Self(inner)
    }
}
