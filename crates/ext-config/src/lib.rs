//! Typed configuration objects for ExtJS widgets.
//!
//! Each shape here is a [`config_shape!`](jsdynamic::config_shape) view over
//! the option object an ExtJS constructor takes. Build one with the typed
//! setters, then hand off the bag:
//!
//! ```
//! use ext_config::{ButtonConfig, ButtonEvents, listeners};
//! use jsdynamic::{ConfigShape, FunctionRef};
//!
//! let mut button = ButtonConfig::new();
//! button
//!     .set_text("Save")
//!     .set_min_width(80)
//!     .set_listeners(listeners([(ButtonEvents::CLICK, FunctionRef::new("App.save"))]));
//!
//! assert_eq!(
//!     button.to_js_literal(),
//!     r#"{text: "Save", minWidth: 80, listeners: {click: App.save}}"#
//! );
//! ```
//!
//! The TypeScript declarations for every shape are generated at build time
//! and exposed as [`TYPESCRIPT_DECLARATIONS`].

mod button;
mod events;
mod layout;
mod property_grid;
mod quick_tip;

pub use button::ButtonConfig;
pub use events::{ButtonEvents, PropertyGridEvents, listeners};
pub use layout::AbsoluteLayoutConfig;
pub use property_grid::PropertyGridConfig;
pub use quick_tip::QuickTipConfig;

use jsdynamic::Value;

/// An `Ext.data.Store` instance or store config, passed through unchecked.
pub type StoreRef = Value;

/// An `Ext.Template` instance, passed through unchecked.
pub type TemplateRef = Value;

/// TypeScript declarations of all shapes in this crate.
pub const TYPESCRIPT_DECLARATIONS: &str =
    include_str!(concat!(env!("OUT_DIR"), "/ext-config.d.ts"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declarations_cover_every_shape() {
        for name in [
            "ButtonConfig",
            "QuickTipConfig",
            "PropertyGridConfig",
            "AbsoluteLayoutConfig",
        ] {
            assert!(
                TYPESCRIPT_DECLARATIONS.contains(&format!("export interface {name} {{")),
                "missing {name}"
            );
        }
    }

    #[test]
    fn test_declarations_use_registered_types() {
        assert!(TYPESCRIPT_DECLARATIONS.contains("  template?: Ext.Template;"));
        assert!(TYPESCRIPT_DECLARATIONS.contains("  store?: Ext.data.Store;"));
        assert!(TYPESCRIPT_DECLARATIONS.contains("  tooltip?: string | object;"));
        assert!(TYPESCRIPT_DECLARATIONS.contains("  handler?: Function;"));
        assert!(TYPESCRIPT_DECLARATIONS.contains("  mouseOffset?: number[];"));
    }

    #[test]
    fn test_declarations_carry_docs() {
        assert!(TYPESCRIPT_DECLARATIONS.starts_with("/**\n * TypeScript declarations for ext-config\n"));
        assert!(TYPESCRIPT_DECLARATIONS.contains("/** The button text */\n  text?: string;"));
        assert!(TYPESCRIPT_DECLARATIONS
            .contains("/** Hide each contained item on render */\n  renderHidden?: boolean;"));
    }
}
