use jsdynamic::{Either, PropertyBag, Value, config_shape};

use crate::StoreRef;

config_shape! {
    /// Configuration object for `Ext.grid.PropertyGrid`, a two-column grid
    /// editing the properties of one source object.
    pub struct PropertyGridConfig("Ext.grid.PropertyGrid") {
        /// The object whose properties are edited, as `{name: value}` pairs
        "source" => source / set_source: Value,
        /// Editors keyed by property name, overriding the type-based defaults
        "customEditors" => custom_editors / set_custom_editors: Value,
        "clicksToEdit" => clicks_to_edit / set_clicks_to_edit: f64,
        "autoEncode" => auto_encode / set_auto_encode: bool,
        "selModel" => sel_model / set_sel_model: Value,
        "store" => store / set_store: StoreRef,
        "cm" => cm / set_cm: Value,
        "colModel" => col_model / set_col_model: Value,
        "sm" => sm / set_sm: Value,
        "columns" => columns / set_columns: Vec<Value>,
        "maxHeight" => max_height / set_max_height: f64,
        "disableSelection" => disable_selection / set_disable_selection: bool,
        "enableColumnMove" => enable_column_move / set_enable_column_move: bool,
        "enableColumnResize" => enable_column_resize / set_enable_column_resize: bool,
        "viewConfig" => view_config / set_view_config: Value,
        "hideHeaders" => hide_headers / set_hide_headers: bool,
        "minColumnWidth" => min_column_width / set_min_column_width: f64,
        "trackMouseOver" => track_mouse_over / set_track_mouse_over: bool,
        "enableDragDrop" => enable_drag_drop / set_enable_drag_drop: bool,
        "enableColumnHide" => enable_column_hide / set_enable_column_hide: bool,
        "enableHdMenu" => enable_hd_menu / set_enable_hd_menu: bool,
        "stripeRows" => stripe_rows / set_stripe_rows: bool,
        /// Id of the column that expands to fill unused width
        "autoExpandColumn" => auto_expand_column / set_auto_expand_column: String,
        "autoExpandMin" => auto_expand_min / set_auto_expand_min: f64,
        "autoExpandMax" => auto_expand_max / set_auto_expand_max: f64,
        "view" => view / set_view: Value,
        /// `true` or an `Ext.LoadMask` config
        "loadMask" => load_mask / set_load_mask: Value,
        "deferRowRender" => defer_row_render / set_defer_row_render: bool,
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
        "shadow" => shadow / set_shadow: Value,
        "shadowOffset" => shadow_offset / set_shadow_offset: f64,
        "shim" => shim / set_shim: bool,
        "html" => html / set_html: Value,
        "contentEl" => content_el / set_content_el: String,
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
        "width" => width / set_width: f64,
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
    use crate::{PropertyGridEvents, listeners};
    use jsdynamic::{ConfigShape, FunctionRef, LiteralWriter};

    fn sample_grid() -> PropertyGridConfig {
        let source: PropertyBag = [
            ("(name)", Value::from("Properties Grid")),
            ("grouping", Value::from(false)),
            ("version", Value::from(0.01)),
        ]
        .into_iter()
        .collect();

        let mut grid = PropertyGridConfig::new();
        grid.set_title("Properties Grid")
            .set_auto_height(true)
            .set_width(300)
            .set_render_to("prop-grid")
            .set_source(source);
        grid
    }

    #[test]
    fn test_property_grid_literal() {
        let grid = sample_grid();
        assert_eq!(
            grid.to_js_literal(),
            r#"{title: "Properties Grid", autoHeight: true, width: 300, renderTo: "prop-grid", source: {"(name)": "Properties Grid", grouping: false, version: 0.01}}"#
        );
    }

    #[test]
    fn test_property_grid_pretty_literal() {
        let mut grid = PropertyGridConfig::new();
        grid.set_id("props").set_stripe_rows(true);

        let literal = LiteralWriter::new().indent(Some(2)).write(grid.bag());
        assert_eq!(literal, "{\n  id: \"props\",\n  stripeRows: true\n}");
    }

    #[test]
    fn test_source_reads_back_as_object() {
        let grid = sample_grid();
        let source = grid.source().unwrap().unwrap_or(Value::Null);
        let source = source.as_object().cloned().unwrap_or_default();
        assert_eq!(
            source.keys().collect::<Vec<_>>(),
            ["(name)", "grouping", "version"]
        );
    }

    #[test]
    fn test_change_listeners() {
        let mut grid = sample_grid();
        grid.set_listeners(listeners([
            (PropertyGridEvents::BEFORE_PROPERTY_CHANGE, FunctionRef::new("App.canEdit")),
            (PropertyGridEvents::PROPERTY_CHANGE, FunctionRef::new("App.save")),
        ]));

        let literal = grid.to_js_literal();
        assert!(literal.ends_with(
            "listeners: {beforepropertychange: App.canEdit, propertychange: App.save}}"
        ));
        assert!(grid.to_json().is_err());
    }

    #[test]
    fn test_store_passes_through() {
        let mut grid = PropertyGridConfig::new();
        grid.set_store(FunctionRef::new("Ext.StoreMgr.lookup('props')"));
        assert_eq!(
            grid.store().unwrap(),
            Some(Value::from(FunctionRef::new("Ext.StoreMgr.lookup('props')")))
        );
        assert_eq!(PropertyGridConfig::property("store").unwrap().js_type(), "any");
    }
}
