use jsdynamic::{Either, FunctionRef, PropertyBag, Value, config_shape};

use crate::TemplateRef;

config_shape! {
    /// Configuration object for `Ext.Button`.
    pub struct ButtonConfig("Ext.Button") {
        /// The button text
        "text" => text / set_text: String,
        /// Path to an image shown in the button, set as its CSS background image
        "icon" => icon / set_icon: String,
        /// Called when the button is clicked, as an alternative to the click event
        "handler" => handler / set_handler: FunctionRef,
        /// The scope of the handler
        "scope" => scope / set_scope: Value,
        /// Minimum width, used to give a set of buttons a common width
        "minWidth" => min_width / set_min_width: f64,
        /// A tooltip string or a QuickTips config object
        "tooltip" => tooltip / set_tooltip: Either<String, PropertyBag>,
        "hidden" => hidden / set_hidden: bool,
        "disabled" => disabled / set_disabled: bool,
        /// Start pressed; only applies when `enableToggle` is set
        "pressed" => pressed / set_pressed: bool,
        /// The toggle group this button belongs to; at most one member is pressed
        "toggleGroup" => toggle_group / set_toggle_group: String,
        /// Repeat the click event while the mouse is down, or an
        /// `Ext.util.ClickRepeater` config object
        "repeat" => repeat / set_repeat: Either<bool, PropertyBag>,
        "tabIndex" => tab_index / set_tab_index: f64,
        "allowDepress" => allow_depress / set_allow_depress: bool,
        "enableToggle" => enable_toggle / set_enable_toggle: bool,
        /// Called with the button and its next state when a toggle button is clicked
        "toggleHandler" => toggle_handler / set_toggle_handler: FunctionRef,
        /// A menu object, menu id or menu config
        "menu" => menu / set_menu: Value,
        "menuAlign" => menu_align / set_menu_align: String,
        "iconCls" => icon_cls / set_icon_cls: String,
        /// `submit`, `reset` or `button`
        "type" => button_type / set_button_type: String,
        "clickEvent" => click_event / set_click_event: String,
        "handleMouseEvents" => handle_mouse_events / set_handle_mouse_events: bool,
        /// `qtip` for QuickTips or `title` for the title attribute
        "tooltipType" => tooltip_type / set_tooltip_type: String,
        /// Template for the button's main element
        "template" => template / set_template: TemplateRef,
        "cls" => cls / set_cls: String,
        "xtype" => xtype / set_xtype: String,
        "id" => id / set_id: String,
        "autoEl" => auto_el / set_auto_el: Either<String, PropertyBag>,
        "overCls" => over_cls / set_over_cls: String,
        "style" => style / set_style: String,
        "ctCls" => ct_cls / set_ct_cls: String,
        "plugins" => plugins / set_plugins: Value,
        "applyTo" => apply_to / set_apply_to: Value,
        "renderTo" => render_to / set_render_to: Value,
        "stateful" => stateful / set_stateful: bool,
        "stateId" => state_id / set_state_id: String,
        "disabledClass" => disabled_class / set_disabled_class: String,
        "allowDomMove" => allow_dom_move / set_allow_dom_move: bool,
        "autoShow" => auto_show / set_auto_show: bool,
        "hideMode" => hide_mode / set_hide_mode: String,
        "hideParent" => hide_parent / set_hide_parent: bool,
        "listeners" => listeners / set_listeners: Value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuickTipConfig;
    use jsdynamic::{ConfigError, ConfigShape, ValueKind};

    #[test]
    fn test_button_round_trip() {
        let mut button = ButtonConfig::new();
        button.set_text("OK").set_disabled(false).set_min_width(80);

        assert_eq!(button.text().unwrap(), Some("OK".to_string()));
        assert_eq!(button.disabled().unwrap(), Some(false));
        assert_eq!(button.min_width().unwrap(), Some(80.0));
        assert_eq!(
            button.keys().collect::<Vec<_>>(),
            ["text", "disabled", "minWidth"]
        );
        assert_eq!(button.hidden().unwrap(), None);
    }

    #[test]
    fn test_tooltip_read_through_another_shape() {
        let mut button = ButtonConfig::new();
        button.set_tooltip(Either::Left("Saves the form".to_string()));
        assert_eq!(
            button.tooltip().unwrap(),
            Some(Either::Left("Saves the form".to_string()))
        );

        // QuickTipConfig declares `width` as a number.
        button.set_raw("width", "auto");
        let tip = QuickTipConfig::from_bag(button.into_bag());
        assert!(matches!(
            tip.width(),
            Err(ConfigError::TypeMismatch { found: ValueKind::String, .. })
        ));
    }

    #[test]
    fn test_tooltip_as_config_object() {
        let mut tip = PropertyBag::new();
        tip.set("title", "Save");
        tip.set("text", "Writes the form to the server");

        let mut button = ButtonConfig::new();
        button.set_tooltip(Either::Right(tip.clone()));
        assert_eq!(button.tooltip().unwrap(), Some(Either::Right(tip)));
    }

    #[test]
    fn test_repeat_accepts_bool_or_object() {
        let mut button = ButtonConfig::new();
        button.set_repeat(Either::Left(true));
        assert_eq!(button.repeat().unwrap(), Some(Either::Left(true)));

        button.set_raw("repeat", "fast");
        assert!(button.repeat().is_err());
        assert!(button.validate().is_err());
    }

    #[test]
    fn test_type_option_keeps_js_key() {
        let mut button = ButtonConfig::new();
        button.set_button_type("submit");
        assert_eq!(button.get_raw("type"), Some(&Value::from("submit")));
        assert_eq!(ButtonConfig::property("type").unwrap().js_type(), "string");
    }

    #[test]
    fn test_escape_hatch_leaves_typed_view_alone() {
        let mut button = ButtonConfig::new();
        button.set_text("OK").set_raw("ariaLabel", "Confirm");

        assert!(!ButtonConfig::declares("ariaLabel"));
        assert_eq!(button.get_raw("ariaLabel"), Some(&Value::from("Confirm")));
        assert_eq!(button.get_raw("ariaRole"), None);
        assert_eq!(button.text().unwrap(), Some("OK".to_string()));
        assert!(button.validate().is_ok());
    }

    #[test]
    fn test_handler_renders_in_literal_only() {
        let mut button = ButtonConfig::new();
        button
            .set_text("OK")
            .set_handler(FunctionRef::new("function () { win.close(); }"));

        assert_eq!(
            button.to_js_literal(),
            r#"{text: "OK", handler: function () { win.close(); }}"#
        );
        assert!(matches!(button.to_json(), Err(ConfigError::Serialize(_))));
    }
}
