//! Writes sample ExtJS configurations as fixtures for the JavaScript side.
//!
//! Every fixture gets a `.js` file with the object literal. Configurations
//! without function references also get a `.json` file.

use clap::Parser;
use ext_config::{
    AbsoluteLayoutConfig, ButtonConfig, ButtonEvents, PropertyGridConfig, QuickTipConfig,
    listeners,
};
use jsdynamic::{ConfigShape, Either, FunctionRef, LiteralWriter, PropertyBag, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "generate-fixtures",
    about = "Write sample ExtJS configuration objects as JSON and JavaScript",
    version
)]
struct Cli {
    /// Output directory for the fixture files
    #[arg(default_value = "fixtures")]
    out_dir: PathBuf,

    /// Indent the JavaScript literals with two spaces
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().without_time())
        .try_init()
        .ok();

    fs::create_dir_all(&cli.out_dir)?;

    let mut writer = LiteralWriter::new();
    if cli.pretty {
        writer.indent(Some(2));
    }

    // Plain button, JSON-safe
    let mut save = ButtonConfig::new();
    save.set_text("Save")
        .set_min_width(80)
        .set_tooltip(Either::Left("Saves the form".to_string()));
    write_fixture(&cli.out_dir, "button", &save, &writer)?;

    // Toggle button with handlers, literal only
    let mut toggle = ButtonConfig::new();
    toggle
        .set_text("Bold")
        .set_enable_toggle(true)
        .set_toggle_group("format")
        .set_toggle_handler(FunctionRef::new("Editor.onToggle"))
        .set_listeners(listeners([
            (ButtonEvents::MOUSE_OVER, FunctionRef::new("Editor.onHover")),
            (ButtonEvents::MOUSE_OUT, FunctionRef::new("Editor.onLeave")),
        ]));
    write_fixture(&cli.out_dir, "button_toggle", &toggle, &writer)?;

    let mut tip = QuickTipConfig::new();
    tip.set_target("save-btn")
        .set_title("Save")
        .set_show_delay(250)
        .set_dismiss_delay(0)
        .set_mouse_offset(vec![15.0, 18.0])
        .set_track_mouse(true);
    write_fixture(&cli.out_dir, "quick_tip", &tip, &writer)?;

    let source: PropertyBag = [
        ("(name)", Value::from("Properties Grid")),
        ("grouping", Value::from(false)),
        ("autoFitColumns", Value::from(true)),
        ("productionQuality", Value::from(false)),
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
    write_fixture(&cli.out_dir, "property_grid", &grid, &writer)?;

    let mut layout = AbsoluteLayoutConfig::new();
    layout.set_extra_cls("x-abs-item").set_render_hidden(true);
    write_fixture(&cli.out_dir, "absolute_layout", &layout, &writer)?;

    tracing::info!(dir = %cli.out_dir.display(), "fixtures generated");
    Ok(())
}

fn write_fixture<S: ConfigShape>(
    dir: &Path,
    name: &str,
    shape: &S,
    writer: &LiteralWriter,
) -> std::io::Result<()> {
    if let Err(err) = shape.validate() {
        tracing::warn!(fixture = name, error = %err, "fixture does not match its shape");
    }

    let literal = writer.write(shape.bag());
    fs::write(dir.join(format!("{name}.js")), literal + "\n")?;

    match shape.bag().to_json_string() {
        Ok(json) => {
            fs::write(dir.join(format!("{name}.json")), json + "\n")?;
            tracing::info!(fixture = name, shape = S::JS_NAME, "wrote .js and .json");
        }
        Err(err) => {
            tracing::info!(fixture = name, shape = S::JS_NAME, reason = %err, "wrote .js only");
        }
    }
    Ok(())
}
