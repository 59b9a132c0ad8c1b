//! Typed views over a [`PropertyBag`].
//!
//! A *config shape* is a fixed list of `(name, type)` pairs describing one
//! widget family's configuration object. The [`config_shape!`](crate::config_shape)
//! macro turns such a list into a struct that owns a bag and exposes one
//! typed getter and setter per property; every accessor forwards to the bag
//! with the property name as key.

use std::borrow::Cow;

use crate::convert::{FromValue, accepts};
use crate::literal::LiteralWriter;
use crate::{ConfigError, PropertyBag, Value};

/// Schema entry for one declared property of a shape.
#[derive(Clone, Copy)]
pub struct PropertyDecl {
    /// Bag key, in the JavaScript library's spelling (e.g. `"minWidth"`).
    pub name: &'static str,
    /// The Rust type as written in the declaration.
    pub rust_type: &'static str,
    js_type: fn() -> Cow<'static, str>,
    accepts: fn(&Value) -> bool,
}

impl PropertyDecl {
    pub const fn new<T: FromValue>(name: &'static str, rust_type: &'static str) -> Self {
        Self {
            name,
            rust_type,
            js_type: T::type_name,
            accepts: accepts::<T>,
        }
    }

    /// The declared type in JavaScript notation, e.g. `"string | object"`.
    pub fn js_type(&self) -> Cow<'static, str> {
        (self.js_type)()
    }

    /// Whether `value` satisfies the declared type.
    pub fn accepts(&self, value: &Value) -> bool {
        (self.accepts)(value)
    }
}

impl std::fmt::Debug for PropertyDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyDecl")
            .field("name", &self.name)
            .field("rust_type", &self.rust_type)
            .field("js_type", &self.js_type())
            .finish()
    }
}

/// A typed configuration view owning one [`PropertyBag`].
///
/// Implementations are generated by [`config_shape!`](crate::config_shape).
/// Besides the generated typed accessors, every shape offers an escape hatch
/// (`get_raw`, `set_raw`, `read_raw`, `remove_raw`) for options the shape
/// does not declare, such as plugin settings or newer library options.
///
/// A view is meant to be built and handed off within one call sequence.
/// Mutating it after handing out the bag's contents is the caller's concern.
pub trait ConfigShape: Sized {
    /// Name of the widget class this shape configures, e.g. `"Ext.Button"`.
    const JS_NAME: &'static str;

    /// Declared properties in declaration order.
    const PROPERTIES: &'static [PropertyDecl];

    fn bag(&self) -> &PropertyBag;

    /// Mutable access to the backing bag, bypassing the typed accessors.
    fn bag_mut(&mut self) -> &mut PropertyBag;

    /// Wraps an existing bag without checking its contents.
    fn from_bag(bag: PropertyBag) -> Self;

    /// Hands off the backing bag.
    fn into_bag(self) -> PropertyBag;

    /// Looks up the declaration for `key`.
    fn property(key: &str) -> Option<&'static PropertyDecl> {
        Self::PROPERTIES.iter().find(|decl| decl.name == key)
    }

    /// Whether `key` is one of the shape's declared properties.
    fn declares(key: &str) -> bool {
        Self::property(key).is_some()
    }

    fn get_raw(&self, key: &str) -> Option<&Value> {
        self.bag().get(key)
    }

    fn set_raw(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.bag_mut().set(key, value);
        self
    }

    fn read_raw<T: FromValue>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        self.bag().get_as(key)
    }

    fn remove_raw(&mut self, key: &str) -> Option<Value> {
        self.bag_mut().remove(key)
    }

    fn has(&self, key: &str) -> bool {
        self.bag().has(key)
    }

    fn keys(&self) -> impl Iterator<Item = &str> {
        self.bag().keys()
    }

    /// Checks every declared property present in the bag against its
    /// declared type. Keys the shape does not declare are not checked.
    fn validate(&self) -> Result<(), ConfigError> {
        for decl in Self::PROPERTIES {
            let Some(value) = self.bag().get(decl.name) else {
                continue;
            };
            if !decl.accepts(value) {
                tracing::debug!(
                    shape = Self::JS_NAME,
                    key = decl.name,
                    found = %value.kind(),
                    "shape validation failed"
                );
                return Err(ConfigError::TypeMismatch {
                    key: decl.name.to_string(),
                    expected: decl.js_type(),
                    found: value.kind(),
                });
            }
        }
        Ok(())
    }

    fn to_json(&self) -> Result<serde_json::Value, ConfigError> {
        self.bag().to_json()
    }

    fn to_js_literal(&self) -> String {
        LiteralWriter::new().write(self.bag())
    }
}

/// Declares a typed configuration view.
///
/// Each property line reads `"jsName" => getter / setter: Type`. The getter
/// returns `Result<Option<Type>, ConfigError>`: `Ok(None)` when the property
/// was never set, and [`ConfigError::TypeMismatch`] when the bag holds a value
/// of another kind. The setter accepts anything `Into<Type>` and always
/// succeeds.
///
/// # Example
///
/// ```
/// use jsdynamic::{ConfigShape, config_shape};
///
/// config_shape! {
///     /// Configuration for a simple text field.
///     pub struct FieldConfig("Ext.form.Field") {
///         /// Label shown next to the field.
///         "fieldLabel" => field_label / set_field_label: String,
///         "width" => width / set_width: f64,
///     }
/// }
///
/// let mut field = FieldConfig::new();
/// field.set_field_label("Name").set_width(120);
///
/// assert_eq!(field.field_label().unwrap(), Some("Name".to_string()));
/// assert_eq!(field.width().unwrap(), Some(120.0));
/// assert_eq!(field.keys().collect::<Vec<_>>(), ["fieldLabel", "width"]);
/// ```
#[macro_export]
macro_rules! config_shape {
    (
        $(#[$struct_meta:meta])*
        $vis:vis struct $name:ident ($js_name:literal) {
            $(
                $(#[$meta:meta])*
                $key:literal => $getter:ident / $setter:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$struct_meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            bag: $crate::PropertyBag,
        }

        impl $name {
            /// Creates a view over an empty bag.
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $(#[$meta])*
                pub fn $getter(
                    &self,
                ) -> ::core::result::Result<::core::option::Option<$ty>, $crate::ConfigError> {
                    self.bag.get_as::<$ty>($key)
                }

                #[doc = concat!("Sets `", $key, "`.")]
                pub fn $setter(&mut self, value: impl ::core::convert::Into<$ty>) -> &mut Self {
                    let value: $ty = value.into();
                    self.bag.set($key, value);
                    self
                }
            )*
        }

        impl $crate::ConfigShape for $name {
            const JS_NAME: &'static str = $js_name;

            const PROPERTIES: &'static [$crate::PropertyDecl] = &[
                $($crate::PropertyDecl::new::<$ty>($key, stringify!($ty)),)*
            ];

            fn bag(&self) -> &$crate::PropertyBag {
                &self.bag
            }

            fn bag_mut(&mut self) -> &mut $crate::PropertyBag {
                &mut self.bag
            }

            fn from_bag(bag: $crate::PropertyBag) -> Self {
                Self { bag }
            }

            fn into_bag(self) -> $crate::PropertyBag {
                self.bag
            }
        }

        impl ::core::convert::From<$name> for $crate::PropertyBag {
            fn from(shape: $name) -> Self {
                $crate::ConfigShape::into_bag(shape)
            }
        }

        impl ::core::convert::From<$name> for $crate::Value {
            fn from(shape: $name) -> Self {
                $crate::Value::Object($crate::ConfigShape::into_bag(shape))
            }
        }
    };
}
