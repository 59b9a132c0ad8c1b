//! The ordered, untyped property bag backing every configuration object.

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter};
use serde::Serialize;

use crate::convert::FromValue;
use crate::literal::LiteralWriter;
use crate::{ConfigError, Value};

/// An insertion-ordered map from property name to [`Value`].
///
/// This is the runtime form of a JavaScript configuration object. Keys are
/// unique; writing an existing key replaces its value but keeps the key's
/// original position, as assigning to a property of a JavaScript object does.
/// A key that was never written is *absent*, which is distinct from a key
/// holding [`Value::Null`].
///
/// None of the bag operations fail. Typed reads go through
/// [`get_as`](PropertyBag::get_as), which reports kind mismatches.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PropertyBag {
    entries: IndexMap<String, Value>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, or `None` when the key is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns whether `key` is present, regardless of its value.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Erases `key`. The remaining keys keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Property names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads `key` as a `T`.
    ///
    /// Returns `Ok(None)` when the key is absent and
    /// [`ConfigError::TypeMismatch`] when the stored value does not convert.
    pub fn get_as<T: FromValue>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        let Some(value) = self.entries.get(key) else {
            return Ok(None);
        };
        match T::from_value(value) {
            Some(converted) => Ok(Some(converted)),
            None => {
                tracing::debug!(
                    key,
                    found = %value.kind(),
                    expected = %T::type_name(),
                    "typed read mismatch"
                );
                Err(ConfigError::TypeMismatch {
                    key: key.to_string(),
                    expected: T::type_name(),
                    found: value.kind(),
                })
            }
        }
    }

    /// Renders the bag as a JSON value, keeping key order.
    ///
    /// Fails when the bag (or a nested bag) contains a function reference.
    pub fn to_json(&self) -> Result<serde_json::Value, ConfigError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Renders the bag as compact JSON text.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builds a bag from a JSON object.
    pub fn from_json(json: serde_json::Value) -> Result<Self, ConfigError> {
        match Value::from(json) {
            Value::Object(bag) => Ok(bag),
            other => Err(ConfigError::NotAnObject {
                found: other.kind(),
            }),
        }
    }

    /// Renders the bag as a compact JavaScript object literal.
    pub fn to_js_literal(&self) -> String {
        LiteralWriter::new().write(self)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = PropertyBag::new();
        bag.extend(iter);
        bag
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for PropertyBag {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl IntoIterator for PropertyBag {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropertyBag {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FunctionRef;
    use serde_json::json;

    #[test]
    fn test_get_absent_key() {
        let bag = PropertyBag::new();
        assert_eq!(bag.get("hidden"), None);
        assert!(!bag.has("hidden"));
        assert!(matches!(bag.get_as::<bool>("hidden"), Ok(None)));
    }

    #[test]
    fn test_null_is_not_absent() {
        let mut bag = PropertyBag::new();
        bag.set("renderTo", Value::Null);
        assert!(bag.has("renderTo"));
        assert_eq!(bag.get("renderTo"), Some(&Value::Null));
    }

    #[test]
    fn test_last_write_wins_and_keeps_position() {
        let mut bag = PropertyBag::new();
        bag.set("text", "Cancel");
        bag.set("disabled", true);
        let previous = bag.set("text", "OK");

        assert_eq!(previous, Some(Value::from("Cancel")));
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.keys().collect::<Vec<_>>(), ["text", "disabled"]);
        assert_eq!(bag.get("text"), Some(&Value::from("OK")));
    }

    #[test]
    fn test_remove_erases_key() {
        let mut bag: PropertyBag = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        assert_eq!(bag.remove("b"), Some(Value::from(2)));
        assert!(!bag.has("b"));
        assert_eq!(bag.keys().collect::<Vec<_>>(), ["a", "c"]);
        assert_eq!(bag.remove("b"), None);
    }

    #[test]
    fn test_get_as_mismatch() {
        let mut bag = PropertyBag::new();
        bag.set("minWidth", "80");
        let err = bag.get_as::<f64>("minWidth").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::TypeMismatch { ref key, found: crate::ValueKind::String, .. }
                if key == "minWidth"
        ));
    }

    #[test]
    fn test_to_json_keeps_order() {
        let mut nested = PropertyBag::new();
        nested.set("title", "Tip");
        let mut bag = PropertyBag::new();
        bag.set("text", "OK");
        bag.set("minWidth", 80);
        bag.set("tooltip", nested);

        assert_eq!(
            bag.to_json_string().unwrap(),
            r#"{"text":"OK","minWidth":80,"tooltip":{"title":"Tip"}}"#
        );
        assert_eq!(
            bag.to_json().unwrap(),
            json!({ "text": "OK", "minWidth": 80, "tooltip": { "title": "Tip" } })
        );
    }

    #[test]
    fn test_json_round_trip_keeps_numbers() {
        let json = json!({ "width": 300, "ratio": 0.75, "offset": [15, -18] });
        let bag = PropertyBag::from_json(json.clone()).unwrap();
        assert_eq!(bag.to_json().unwrap(), json);
    }

    #[test]
    fn test_to_json_rejects_function_refs() {
        let mut bag = PropertyBag::new();
        bag.set("handler", FunctionRef::new("onClick"));
        assert!(matches!(bag.to_json(), Err(ConfigError::Serialize(_))));
    }

    #[test]
    fn test_from_json() {
        let bag = PropertyBag::from_json(json!({ "b": 1, "a": [1, 2] })).unwrap();
        assert_eq!(bag.keys().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(bag.get_as::<Vec<u32>>("a").unwrap(), Some(vec![1, 2]));

        let err = PropertyBag::from_json(json!([1, 2])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotAnObject {
                found: crate::ValueKind::Array
            }
        ));
    }
}
