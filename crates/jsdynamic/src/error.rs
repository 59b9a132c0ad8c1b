//! Errors raised while reading or handing off configuration objects.

use std::borrow::Cow;

use thiserror::Error;

use crate::ValueKind;

/// Errors produced by typed reads and by the JSON handoff.
///
/// Bag operations themselves (`get`, `set`, `has`, `keys`, `remove`) are
/// total and never produce an error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A typed read found a value of an incompatible kind.
    #[error("property `{key}` holds a {found} value, expected {expected}")]
    TypeMismatch {
        /// The bag key that was read.
        key: String,
        /// The declared type, in JavaScript notation.
        expected: Cow<'static, str>,
        /// The kind actually stored under `key`.
        found: ValueKind,
    },

    /// JSON handed in as a configuration object was not an object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: ValueKind },

    /// The bag could not be rendered as JSON.
    #[error("cannot render configuration as JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConfigError {
    /// The key involved in a type mismatch, if this is one.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::TypeMismatch { key, .. } => Some(key.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message() {
        let err = ConfigError::TypeMismatch {
            key: "minWidth".to_string(),
            expected: Cow::Borrowed("number"),
            found: ValueKind::String,
        };
        assert_eq!(
            err.to_string(),
            "property `minWidth` holds a string value, expected number"
        );
        assert_eq!(err.key(), Some("minWidth"));
    }

    #[test]
    fn test_not_an_object_has_no_key() {
        let err = ConfigError::NotAnObject {
            found: ValueKind::Array,
        };
        assert_eq!(err.to_string(), "expected a JSON object, found array");
        assert_eq!(err.key(), None);
    }
}
