use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    List(Vec<String>),
    Text(String),
}

/// Category -> phrase list (or scalar) collection.
///
/// Known list categories: `angles`, `process`, `benefits`, `proof_points`,
/// `sentences`, `ctas`. A service set may also carry a `name` text value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSet {
    inner: BTreeMap<String, TokenValue>,
}

impl TokenSet {
    pub fn new() -> Self {
        TokenSet {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert_list<I, S>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = values.into_iter().map(Into::into).collect();
        self.inner.insert(key.into(), TokenValue::List(list));
    }

    pub fn insert_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), TokenValue::Text(value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&TokenValue> {
        self.inner.get(key)
    }

    /// The list under `key`; empty when absent or scalar.
    pub fn list(&self, key: &str) -> &[String] {
        match self.inner.get(key) {
            Some(TokenValue::List(items)) => items,
            _ => &[],
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.inner.get(key) {
            Some(TokenValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.inner.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TokenValue)> {
        self.inner.iter()
    }

    /// Layer `overlay` on top of this set.
    ///
    /// Lists present on both sides become the base list followed by overlay
    /// entries not already present. Every other overlay value replaces the
    /// base value.
    pub fn merge(&self, overlay: &TokenSet) -> TokenSet {
        let mut merged = self.clone();
        for (key, value) in &overlay.inner {
            let combined = match (merged.inner.get(key), value) {
                (Some(TokenValue::List(base)), TokenValue::List(extra)) => {
                    TokenValue::List(union_preserving_order(base, extra))
                }
                _ => value.clone(),
            };
            merged.inner.insert(key.clone(), combined);
        }
        merged
    }
}

/// `merge(base, overlay)` as a free function.
pub fn merge(base: &TokenSet, overlay: &TokenSet) -> TokenSet {
    base.merge(overlay)
}

fn union_preserving_order(base: &[String], extra: &[String]) -> Vec<String> {
    let mut out = base.to_vec();
    for item in extra {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}
