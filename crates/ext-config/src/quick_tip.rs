use jsdynamic::{Either, PropertyBag, Value, config_shape};

config_shape! {
    /// Configuration object for `Ext.QuickTip`, the tooltip shown by
    /// `Ext.QuickTips` for elements carrying `qtip` attributes.
    ///
    /// Besides its own options it accepts everything `Ext.Panel`,
    /// `Ext.Container` and `Ext.Component` do.
    pub struct QuickTipConfig("Ext.QuickTip") {
        /// The element, id or component the tip is attached to
        "target" => target / set_target: Value,
        /// Show the `title` attribute of target elements as tips
        "interceptTitles" => intercept_titles / set_intercept_titles: bool,
        "autoHide" => auto_hide / set_auto_hide: bool,
        /// Delay in milliseconds before the tip shows
        "showDelay" => show_delay / set_show_delay: f64,
        /// Delay in milliseconds before the tip hides once the mouse leaves
        "hideDelay" => hide_delay / set_hide_delay: f64,
        /// Delay in milliseconds before a shown tip hides by itself
        "dismissDelay" => dismiss_delay / set_dismiss_delay: f64,
        /// `[x, y]` offset from the mouse position
        "mouseOffset" => mouse_offset / set_mouse_offset: Vec<f64>,
        "trackMouse" => track_mouse / set_track_mouse: bool,
        "closable" => closable / set_closable: bool,
        "width" => width / set_width: f64,
        "minWidth" => min_width / set_min_width: f64,
        "maxWidth" => max_width / set_max_width: f64,
        "shadow" => shadow / set_shadow: Value,
        /// Alignment passed to `Ext.Element.alignTo`
        "defaultAlign" => default_align / set_default_align: String,
        "applyTo" => apply_to / set_apply_to: Value,
        "tbar" => tbar / set_tbar: Value,
        "bbar" => bbar / set_bbar: Value,
        "header" => header / set_header: bool,
        "footer" => footer / set_footer: bool,
        "title" => title / set_title: String,
        "buttons" => buttons / set_buttons: Vec<Value>,
        "autoLoad" => auto_load / set_auto_load: Value,
        "frame" => frame / set_frame: bool,
        "border" => border / set_border: bool,
        "bodyBorder" => body_border / set_body_border: bool,
        "bodyStyle" => body_style / set_body_style: Value,
        "iconCls" => icon_cls / set_icon_cls: String,
        "collapsible" => collapsible / set_collapsible: bool,
        "tools" => tools / set_tools: Vec<Value>,
        "hideCollapseTool" => hide_collapse_tool / set_hide_collapse_tool: bool,
        "titleCollapse" => title_collapse / set_title_collapse: bool,
        "autoScroll" => auto_scroll / set_auto_scroll: bool,
        "floating" => floating / set_floating: bool,
        "shadowOffset" => shadow_offset / set_shadow_offset: f64,
        "shim" => shim / set_shim: bool,
        /// HTML fragment or `Ext.DomHelper` spec used as body content
        "html" => html / set_html: Value,
        "contentEl" => content_el / set_content_el: String,
        /// Key mappings for `Ext.KeyMap`
        "keys" => key_map / set_key_map: Value,
        "draggable" => draggable / set_draggable: bool,
        "tabTip" => tab_tip / set_tab_tip: String,
        "disabled" => disabled / set_disabled: bool,
        "baseCls" => base_cls / set_base_cls: String,
        "collapsedCls" => collapsed_cls / set_collapsed_cls: String,
        "maskDisabled" => mask_disabled / set_mask_disabled: bool,
        "animCollapse" => anim_collapse / set_anim_collapse: bool,
        "headerAsText" => header_as_text / set_header_as_text: bool,
        "buttonAlign" => button_align / set_button_align: String,
        "collapsed" => collapsed / set_collapsed: bool,
        "collapseFirst" => collapse_first / set_collapse_first: bool,
        "minButtonWidth" => min_button_width / set_min_button_width: f64,
        "elements" => elements / set_elements: String,
        "defaultType" => default_type / set_default_type: String,
        "layout" => layout / set_layout: String,
        "layoutConfig" => layout_config / set_layout_config: Value,
        "bufferResize" => buffer_resize / set_buffer_resize: Value,
        "activeItem" => active_item / set_active_item: Value,
        "items" => items / set_items: Value,
        "defaults" => defaults / set_defaults: Value,
        "x" => x / set_x: f64,
        "y" => y / set_y: f64,
        "pageX" => page_x / set_page_x: f64,
        "pageY" => page_y / set_page_y: f64,
        "height" => height / set_height: f64,
        "autoHeight" => auto_height / set_auto_height: bool,
        "autoWidth" => auto_width / set_auto_width: bool,
        "xtype" => xtype / set_xtype: String,
        "id" => id / set_id: String,
        "autoEl" => auto_el / set_auto_el: Either<String, PropertyBag>,
        "cls" => cls / set_cls: String,
        "overCls" => over_cls / set_over_cls: String,
        "style" => style / set_style: String,
        "ctCls" => ct_cls / set_ct_cls: String,
        "hidden" => hidden / set_hidden: bool,
        "plugins" => plugins / set_plugins: Value,
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
    use jsdynamic::ConfigShape;
    use serde_json::json;

    #[test]
    fn test_quick_tip_to_json() {
        let mut tip = QuickTipConfig::new();
        tip.set_title("Help")
            .set_show_delay(250)
            .set_mouse_offset(vec![15.0, 18.0])
            .set_track_mouse(true);

        assert_eq!(tip.mouse_offset().unwrap(), Some(vec![15.0, 18.0]));
        assert_eq!(
            tip.to_json().unwrap().to_string(),
            json!({
                "title": "Help",
                "showDelay": 250,
                "mouseOffset": [15, 18],
                "trackMouse": true,
            })
            .to_string()
        );
    }

    #[test]
    fn test_mouse_offset_rejects_mixed_array() {
        let mut tip = QuickTipConfig::new();
        tip.set_raw("mouseOffset", vec![Value::from(15), Value::from("18")]);
        assert!(tip.mouse_offset().is_err());
    }

    #[test]
    fn test_buttons_hold_nested_configs() {
        let mut ok = crate::ButtonConfig::new();
        ok.set_text("OK");

        let mut tip = QuickTipConfig::new();
        tip.set_closable(true).set_buttons(vec![Value::from(ok)]);

        assert_eq!(tip.to_js_literal(), r#"{closable: true, buttons: [{text: "OK"}]}"#);
        let buttons = tip.buttons().unwrap().unwrap_or_default();
        assert_eq!(buttons.len(), 1);
        assert_eq!(
            buttons[0].as_object().and_then(|bag| bag.get("text")),
            Some(&Value::from("OK"))
        );
    }

    #[test]
    fn test_from_json_then_validate() {
        let bag = PropertyBag::from_json(json!({
            "target": "save-btn",
            "dismissDelay": 0,
            "autoHide": "yes",
        }))
        .unwrap();
        let tip = QuickTipConfig::from_bag(bag);

        assert_eq!(tip.target().unwrap(), Some(Value::from("save-btn")));
        assert_eq!(tip.dismiss_delay().unwrap(), Some(0.0));
        let err = tip.validate().unwrap_err();
        assert_eq!(err.key(), Some("autoHide"));
    }
}
