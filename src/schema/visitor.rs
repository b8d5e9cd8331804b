use std::collections::BTreeSet;

use serde_json::{Map, Value};

use super::graph::object_type;

/// What a pruning pass removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneStats {
    /// Dotted paths of removed properties, e.g. `makesOffer` or `provider.review`.
    pub stripped_keys: Vec<String>,
    /// `(path, type)` of removed nested objects.
    pub removed_objects: Vec<(String, String)>,
}

impl PruneStats {
    pub fn is_empty(&self) -> bool {
        self.stripped_keys.is_empty() && self.removed_objects.is_empty()
    }
}

/// Depth-first pruning of JSON trees.
///
/// Drops properties named in `banned_keys`, and nested objects whose
/// effective type is in `banned_types` (as property values or array
/// elements). The root object's own type is not inspected.
#[derive(Debug, Clone)]
pub struct TreePruner {
    banned_keys: BTreeSet<String>,
    banned_types: BTreeSet<String>,
}

impl TreePruner {
    pub fn new(banned_keys: BTreeSet<String>, banned_types: BTreeSet<String>) -> Self {
        Self {
            banned_keys,
            banned_types,
        }
    }

    pub fn prune(&self, root: &mut Map<String, Value>) -> PruneStats {
        let mut stats = PruneStats::default();
        self.visit_object(root, "", &mut stats);
        stats
    }

    /// `prune` for any JSON value. Non-object roots have every element
    /// inspected, since there is no owning node to exempt.
    pub fn prune_value(&self, root: &mut Value) -> PruneStats {
        let mut stats = PruneStats::default();
        match root {
            Value::Object(map) => self.visit_object(map, "", &mut stats),
            other => self.visit_value(other, "", &mut stats),
        }
        stats
    }

    /// `find_banned` for any JSON value.
    pub fn find_banned_value(&self, root: &Value) -> Vec<(String, String)> {
        match root {
            Value::Object(map) => self.find_banned(map),
            other => {
                let mut found = Vec::new();
                self.collect_banned(other, "", &mut found);
                found
            }
        }
    }

    /// Nested banned types under `root`, without modifying it.
    pub fn find_banned(&self, root: &Map<String, Value>) -> Vec<(String, String)> {
        let mut found = Vec::new();
        for (key, value) in root {
            self.collect_banned(value, key, &mut found);
        }
        found
    }

    fn banned_type<'v>(&self, value: &'v Value) -> Option<&'v str> {
        value
            .as_object()
            .and_then(object_type)
            .filter(|t| self.banned_types.contains(*t))
    }

    fn visit_object(&self, map: &mut Map<String, Value>, path: &str, stats: &mut PruneStats) {
        let keys: Vec<String> = map.keys().cloned().collect();
        for key in keys {
            let child_path = join_path(path, &key);

            if self.banned_keys.contains(&key) {
                map.remove(&key);
                stats.stripped_keys.push(child_path);
                continue;
            }

            let banned = map.get(&key).and_then(|v| self.banned_type(v)).map(str::to_string);
            if let Some(type_name) = banned {
                map.remove(&key);
                stats.removed_objects.push((child_path, type_name));
                continue;
            }

            if let Some(value) = map.get_mut(&key) {
                self.visit_value(value, &child_path, stats);
            }
        }
    }

    fn visit_value(&self, value: &mut Value, path: &str, stats: &mut PruneStats) {
        match value {
            Value::Object(map) => self.visit_object(map, path, stats),
            Value::Array(items) => {
                items.retain(|item| match self.banned_type(item) {
                    Some(type_name) => {
                        stats.removed_objects.push((path.to_string(), type_name.to_string()));
                        false
                    }
                    None => true,
                });
                for item in items.iter_mut() {
                    self.visit_value(item, path, stats);
                }
            }
            _ => {}
        }
    }

    fn collect_banned(&self, value: &Value, path: &str, found: &mut Vec<(String, String)>) {
        if let Some(type_name) = self.banned_type(value) {
            found.push((path.to_string(), type_name.to_string()));
            return;
        }
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    self.collect_banned(child, &join_path(path, key), found);
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.collect_banned(item, path, found);
                }
            }
            _ => {}
        }
    }
}

/// `owner.path`, or just `owner` for the root.
pub(crate) fn qualified(owner: &str, path: &str) -> String {
    if path.is_empty() {
        owner.to_string()
    } else {
        format!("{owner}.{path}")
    }
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}
