//! Checked conversions from [`Value`] into typed Rust values.
//!
//! Conversions never coerce across kinds: a `number` is never read as a
//! `string`, and a fractional number is never truncated into an integer.

use std::borrow::Cow;

use crate::{FunctionRef, PropertyBag, Value};

/// A type that can be read out of a [`Value`] with a kind check.
pub trait FromValue: Sized {
    /// The JavaScript-facing name of the accepted type, e.g. `"string"` or
    /// `"number[]"`.
    fn type_name() -> Cow<'static, str>;

    /// Converts `value`, or returns `None` when it has an incompatible kind.
    fn from_value(value: &Value) -> Option<Self>;
}

/// One of two alternative types.
///
/// Configuration options documented as e.g. `{String/Object}` accept either
/// kind; reading tries `L` first, then `R`.
#[derive(Debug, Clone, PartialEq)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn left(&self) -> Option<&L> {
        match self {
            Either::Left(left) => Some(left),
            Either::Right(_) => None,
        }
    }

    pub fn right(&self) -> Option<&R> {
        match self {
            Either::Left(_) => None,
            Either::Right(right) => Some(right),
        }
    }
}

impl FromValue for Value {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("any")
    }

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromValue for String {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("string")
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromValue for bool {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("boolean")
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromValue for f64 {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("number")
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromValue for f32 {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("number")
    }

    /// Only numbers an `f32` holds exactly are accepted; narrowing is a mismatch.
    fn from_value(value: &Value) -> Option<Self> {
        let n = value.as_f64()?;
        let narrowed = n as f32;
        (n.is_nan() || f64::from(narrowed) == n).then_some(narrowed)
    }
}

// Only integer types whose whole range an f64 holds exactly. Wider types
// would read back a different value than was written.
macro_rules! integer_from_value {
    ($($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                fn type_name() -> Cow<'static, str> {
                    Cow::Borrowed("number")
                }

                fn from_value(value: &Value) -> Option<Self> {
                    let n = value.as_f64()?;
                    if n.fract() != 0.0 || !n.is_finite() {
                        return None;
                    }
                    if n < f64::from(<$ty>::MIN) || n > f64::from(<$ty>::MAX) {
                        return None;
                    }
                    Some(n as $ty)
                }
            }
        )*
    };
}

integer_from_value!(i8, u8, i16, u16, i32, u32);

impl FromValue for PropertyBag {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("object")
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

impl FromValue for FunctionRef {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("Function")
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Function(func) => Some(func.clone()),
            _ => None,
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn type_name() -> Cow<'static, str> {
        let inner = T::type_name();
        if inner.contains(' ') {
            Cow::Owned(format!("({inner})[]"))
        } else {
            Cow::Owned(format!("{inner}[]"))
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_array()?.iter().map(T::from_value).collect()
    }
}

/// `null` reads as `None`; anything else must convert to `T`.
impl<T: FromValue> FromValue for Option<T> {
    fn type_name() -> Cow<'static, str> {
        Cow::Owned(format!("{} | null", T::type_name()))
    }

    fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            Some(None)
        } else {
            T::from_value(value).map(Some)
        }
    }
}

impl<L: FromValue, R: FromValue> FromValue for Either<L, R> {
    fn type_name() -> Cow<'static, str> {
        Cow::Owned(format!("{} | {}", L::type_name(), R::type_name()))
    }

    fn from_value(value: &Value) -> Option<Self> {
        L::from_value(value)
            .map(Either::Left)
            .or_else(|| R::from_value(value).map(Either::Right))
    }
}

/// Returns whether `value` converts to `T`.
pub fn accepts<T: FromValue>(value: &Value) -> bool {
    T::from_value(value).is_some()
}
