//! Variable and include collections passed to the renderer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Variables available to a render call, keyed by name.
///
/// Values are `serde_json::Value`, a closed set of shapes: null, bool,
/// number, string, sequence and mapping. Insertion order is kept so
/// rendered JSON and CLI output stay stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableSet(IndexMap<String, Value>);

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a variable, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Presence check by key; an empty string or `false` still counts.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Copies every entry of `other` into `self`, overriding existing keys.
    pub fn merge(&mut self, other: &VariableSet) {
        for (key, value) in other.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// The variables as a template context.
    pub fn to_context(&self) -> minijinja::Value {
        minijinja::Value::from_serialize(&self.0)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for VariableSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<serde_json::Map<String, Value>> for VariableSet {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl IntoIterator for VariableSet {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Named fragment bodies that templates can include.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeSet(IndexMap<String, String>);

impl IncludeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, body: impl Into<String>) {
        self.0.insert(name.into(), body.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, body)| (name.as_str(), body.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for IncludeSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contains_checks_keys_not_truthiness() {
        let vars: VariableSet =
            [("empty", json!("")), ("off", json!(false)), ("nothing", Value::Null)]
                .into_iter()
                .collect();
        assert!(vars.contains("empty"));
        assert!(vars.contains("off"));
        assert!(vars.contains("nothing"));
        assert!(!vars.contains("absent"));
    }

    #[test]
    fn test_merge_overrides_existing_keys() {
        let mut base: VariableSet = [("a", "1"), ("b", "2")].into_iter().collect();
        let other: VariableSet = [("b", "3"), ("c", "4")].into_iter().collect();
        base.merge(&other);
        assert_eq!(base.get("b"), Some(&json!("3")));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn test_from_json_object() {
        let json = json!({"name": "World", "tags": ["a", "b"]});
        let serde_json::Value::Object(map) = json else { unreachable!() };
        let vars = VariableSet::from(map);
        assert_eq!(vars.get("tags"), Some(&json!(["a", "b"])));
    }

    #[test]
    fn test_include_set_lookup() {
        let includes: IncludeSet = [("header", "=== HEADER ===")].into_iter().collect();
        assert_eq!(includes.get("header"), Some("=== HEADER ==="));
        assert!(!includes.contains("footer"));
    }
}
