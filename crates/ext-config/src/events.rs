//! Event names accepted in a `listeners` option.

use jsdynamic::{FunctionRef, PropertyBag};

/// Events fired by `Ext.Button`.
pub struct ButtonEvents;

impl ButtonEvents {
    pub const CLICK: &'static str = "click";
    pub const TOGGLE: &'static str = "toggle";
    pub const MOUSE_OVER: &'static str = "mouseover";
    pub const MOUSE_OUT: &'static str = "mouseout";
    pub const MENU_SHOW: &'static str = "menushow";
    pub const MENU_HIDE: &'static str = "menuhide";
    pub const MENU_TRIGGER_OVER: &'static str = "menutriggerover";
    pub const MENU_TRIGGER_OUT: &'static str = "menutriggerout";

    pub const ALL: &'static [&'static str] = &[
        Self::CLICK,
        Self::TOGGLE,
        Self::MOUSE_OVER,
        Self::MOUSE_OUT,
        Self::MENU_SHOW,
        Self::MENU_HIDE,
        Self::MENU_TRIGGER_OVER,
        Self::MENU_TRIGGER_OUT,
    ];
}

/// Events fired by `Ext.grid.PropertyGrid`.
pub struct PropertyGridEvents;

impl PropertyGridEvents {
    /// Fired before a value changes; a handler returning `false` cancels the edit.
    pub const BEFORE_PROPERTY_CHANGE: &'static str = "beforepropertychange";
    pub const PROPERTY_CHANGE: &'static str = "propertychange";

    pub const ALL: &'static [&'static str] =
        &[Self::BEFORE_PROPERTY_CHANGE, Self::PROPERTY_CHANGE];
}

/// Builds a `listeners` object from `(event, handler)` pairs.
///
/// A repeated event keeps its first position and its last handler.
pub fn listeners<K, I>(handlers: I) -> PropertyBag
where
    K: Into<String>,
    I: IntoIterator<Item = (K, FunctionRef)>,
{
    handlers.into_iter().collect()
}
