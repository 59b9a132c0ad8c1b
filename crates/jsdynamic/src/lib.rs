//! # jsdynamic
//!
//! Typed views over dynamic JavaScript configuration objects.
//!
//! JavaScript widget libraries are configured with plain object literals:
//! `new Ext.Button({ text: 'OK', minWidth: 80 })`. This crate gives Rust code
//! a statically typed way to assemble such objects while keeping the artifact
//! that crosses the boundary a bare, ordered key/value map.
//!
//! ## Building blocks
//!
//! - [`Value`] – the tagged union of what a configuration object may hold
//!   (`null`, booleans, numbers, strings, arrays, nested objects, and opaque
//!   [`FunctionRef`]s).
//! - [`PropertyBag`] – an insertion-ordered, untyped map from property name
//!   to [`Value`]. This is what gets handed off.
//! - [`config_shape!`] / [`ConfigShape`] – generates a struct that owns a bag
//!   and exposes one typed getter/setter pair per declared property, plus an
//!   escape hatch for undeclared keys.
//! - [`FromValue`] – checked, non-coercing conversions used by typed reads.
//! - [`LiteralWriter`] – renders a bag as JavaScript source, function
//!   references included. JSON rendering is available through `serde`.
//!
//! ## Quick Start
//!
//! ```rust
//! use jsdynamic::{ConfigShape, Either, FunctionRef, PropertyBag, config_shape};
//!
//! config_shape! {
//!     pub struct ButtonConfig("Ext.Button") {
//!         "text" => text / set_text: String,
//!         "disabled" => disabled / set_disabled: bool,
//!         "minWidth" => min_width / set_min_width: f64,
//!         "tooltip" => tooltip / set_tooltip: Either<String, PropertyBag>,
//!         "handler" => handler / set_handler: FunctionRef,
//!     }
//! }
//!
//! let mut button = ButtonConfig::new();
//! button
//!     .set_text("OK")
//!     .set_disabled(false)
//!     .set_min_width(80)
//!     .set_handler(FunctionRef::new("onOk"));
//!
//! // Options the shape does not declare go through the escape hatch.
//! button.set_raw("ariaLabel", "Confirm");
//!
//! assert_eq!(button.min_width().unwrap(), Some(80.0));
//! assert_eq!(button.tooltip().unwrap(), None);
//! assert_eq!(
//!     button.to_js_literal(),
//!     r#"{text: "OK", disabled: false, minWidth: 80, handler: onOk, ariaLabel: "Confirm"}"#
//! );
//! ```
//!
//! ## Type Mappings
//!
//! | Rust type | JavaScript type | Notes |
//! |-----------|-----------------|-------|
//! | `String` | `string` | |
//! | `bool` | `boolean` | |
//! | `f64` | `number` | |
//! | `f32` | `number` | exactly representable values only |
//! | `i8`-`i32`, `u8`-`u32` | `number` | integral, in-range values only |
//! | `Vec<T>` | `T[]` | every element must convert |
//! | `Option<T>` | `T \| null` | `null` reads as `None` |
//! | `Either<L, R>` | `L \| R` | `L` is tried first |
//! | `PropertyBag` | `object` | |
//! | `FunctionRef` | `Function` | passed through verbatim |
//! | `Value` | `any` | no check |

mod bag;
mod convert;
mod error;
mod literal;
mod shape;
mod value;

pub use bag::PropertyBag;
pub use convert::{Either, FromValue, accepts};
pub use error::ConfigError;
pub use literal::LiteralWriter;
pub use shape::{ConfigShape, PropertyDecl};
pub use value::{FunctionRef, Value, ValueKind};
