//! The tagged value stored in a [`PropertyBag`].

use std::fmt;

use serde::ser::{Error as _, Serialize, Serializer};

use crate::PropertyBag;
use crate::convert::Either;

/// The largest integer `n` such that every integer up to `n` has an exact
/// f64 representation (JavaScript's `Number.MAX_SAFE_INTEGER`).
pub(crate) const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// An untyped JavaScript value as it appears inside a configuration object.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `null`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Every JavaScript number is a double.
    Number(f64),
    String(String),
    Array(Vec<Value>),
    /// A nested configuration object.
    Object(PropertyBag),
    /// A reference to a JavaScript function, passed through untouched.
    Function(FunctionRef),
}

/// The kind of a [`Value`], used when reporting type mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
    Function,
}

impl ValueKind {
    /// The name JavaScript code would use for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Function => "function",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
            Value::Function(_) => ValueKind::Function,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&PropertyBag> {
        match self {
            Value::Object(bag) => Some(bag),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

/// An opaque reference to a JavaScript function.
///
/// The reference is held as the JavaScript expression that names the
/// function on the receiving side (`onSave`, `App.handlers.save`, or an
/// inline `function (btn) { ... }`). It is never parsed or inspected; the
/// literal writer emits it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionRef(String);

impl FunctionRef {
    pub fn new(expr: impl Into<String>) -> Self {
        Self(expr.into())
    }

    /// The JavaScript expression this reference stands for.
    pub fn expr(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FunctionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            // Whole numbers go out as JSON integers, like `JSON.stringify`.
            Value::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => items.serialize(serializer),
            Value::Object(bag) => bag.serialize(serializer),
            Value::Function(func) => Err(S::Error::custom(format!(
                "function reference `{func}` has no JSON representation"
            ))),
        }
    }
}

// ── Conversions into Value ──────────────────────────────────────────

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

// Only types whose every value an f64 holds exactly, so a stored number
// always reads back unchanged.
macro_rules! number_into_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(f64::from(value))
                }
            }
        )*
    };
}

number_into_value!(f64, f32, i8, u8, i16, u16, i32, u32);

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<PropertyBag> for Value {
    fn from(value: PropertyBag) -> Self {
        Value::Object(value)
    }
}

impl From<FunctionRef> for Value {
    fn from(value: FunctionRef) -> Self {
        Value::Function(value)
    }
}

impl<L: Into<Value>, R: Into<Value>> From<Either<L, R>> for Value {
    fn from(value: Either<L, R>) -> Self {
        match value {
            Either::Left(left) => left.into(),
            Either::Right(right) => right.into(),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            // Every JSON number fits an f64, possibly with rounding for huge integers.
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}
