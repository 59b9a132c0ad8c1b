//! # jsdynamic-codegen
//!
//! TypeScript declaration generator for `jsdynamic` config shapes. Every shape
//! declared with `config_shape!` becomes an `export interface` whose
//! properties are all optional, so JavaScript code consuming the handed-off
//! configuration objects can be type-checked against the same schema the
//! Rust side uses.
//!
//! ## Features
//!
//! - Declarations from `(key, type)` lists or from compiled [`ConfigShape`]s
//! - Source file parsing to extract `config_shape!` invocations, doc comments
//!   included
//! - Full `use` import resolution, so aliased imports of the macro and of the
//!   `jsdynamic` types are recognized
//! - Extensible type registry for opaque library types
//! - JSDoc `@typedef` output for plain JavaScript projects
//!
//! [`ConfigShape`]: jsdynamic::ConfigShape
//!
//! ## Quick Start
//!
//! ### Using `DeclarationGenerator` directly
//!
//! ```rust
//! use jsdynamic_codegen::{DeclarationGenerator, PropType};
//!
//! let mut generator = DeclarationGenerator::new();
//!
//! generator.add_shape("QuickTipConfig", Some("Ext.QuickTip"), &[
//!     ("title", PropType::string()),
//!     ("showDelay", PropType::number()),
//!     ("mouseOffset", PropType::array(PropType::number())),
//! ]);
//!
//! let code = generator.generate();
//! assert!(code.contains("  mouseOffset?: number[];"));
//! // Or write to file:
//! // generator.write_to_file("config.d.ts").unwrap();
//! ```
//!
//! ### Scanning sources in `build.rs`
//!
//! ```no_run
//! use jsdynamic_codegen::DeclarationGenerator;
//!
//! fn main() {
//!     DeclarationGenerator::new()
//!         .add_source_dir("src").unwrap()
//!         .write_to_file("generated/config.d.ts").unwrap();
//!
//!     println!("cargo:rerun-if-changed=src");
//! }
//! ```
//!
//! ## Type Mappings
//!
//! | Rust Type | `PropType` | TypeScript Type |
//! |-----------|------------|-----------------|
//! | `u8`-`u32`, `i8`-`i32`, `f32`, `f64` | `PropType::number()` | `number` |
//! | `bool` | `PropType::boolean()` | `boolean` |
//! | `String`, `&str` | `PropType::string()` | `string` |
//! | `Vec<T>` | `PropType::array(T)` | `T[]` |
//! | `Option<T>` | `PropType::nullable(T)` | `T \| null` |
//! | `Box<T>` | `T` | `T` |
//! | `jsdynamic::Either<L, R>` | via registry | `L \| R` |
//! | `jsdynamic::PropertyBag` | via registry | `object` |
//! | `jsdynamic::FunctionRef` | via registry | `Function` |
//! | `jsdynamic::Value` | via registry | `any` |
//! | Other types | `PropType::new(...)` | via registry, else the type name |

mod extractor;
mod generator;
pub mod registry;
mod types;

pub use generator::DeclarationGenerator;
pub use types::{ExternalType, PropType};
