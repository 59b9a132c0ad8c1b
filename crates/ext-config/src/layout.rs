use jsdynamic::config_shape;

config_shape! {
    /// Configuration object for `Ext.layout.AbsoluteLayout`, which positions
    /// child items by their `x` and `y` options.
    pub struct AbsoluteLayoutConfig("Ext.layout.AbsoluteLayout") {
        /// An optional extra CSS class added to each container item
        "extraCls" => extra_cls / set_extra_cls: String,
        /// Hide each contained item on render
        "renderHidden" => render_hidden / set_render_hidden: bool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuickTipConfig;
    use jsdynamic::ConfigShape;

    #[test]
    fn test_layout_config_nests_in_container() {
        let mut layout = AbsoluteLayoutConfig::new();
        layout.set_extra_cls("x-abs-item");

        let mut tip = QuickTipConfig::new();
        tip.set_layout("absolute").set_layout_config(layout);

        assert_eq!(
            tip.to_js_literal(),
            r#"{layout: "absolute", layoutConfig: {extraCls: "x-abs-item"}}"#
        );
        let nested = tip.read_raw::<jsdynamic::PropertyBag>("layoutConfig").unwrap();
        let layout = AbsoluteLayoutConfig::from_bag(nested.unwrap_or_default());
        assert_eq!(layout.extra_cls().unwrap(), Some("x-abs-item".to_string()));
        assert_eq!(layout.render_hidden().unwrap(), None);
    }

    #[test]
    fn test_layout_schema() {
        assert_eq!(AbsoluteLayoutConfig::JS_NAME, "Ext.layout.AbsoluteLayout");
        assert_eq!(AbsoluteLayoutConfig::PROPERTIES.len(), 2);
        assert!(AbsoluteLayoutConfig::declares("renderHidden"));
    }
}
