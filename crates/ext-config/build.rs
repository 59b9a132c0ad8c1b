use jsdynamic_codegen::{DeclarationGenerator, PropType};
use std::env;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let manifest_dir = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR").unwrap_or_default());
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").unwrap_or_default());

    let mut codegen = DeclarationGenerator::new();

    codegen.set_header(
        "TypeScript declarations for ext-config\n\
         These interfaces match the config shapes in src/",
    );

    // Opaque library objects the shapes pass through unchecked
    codegen
        .register_type("crate::StoreRef", PropType::new("Ext.data.Store"))
        .register_type("crate::TemplateRef", PropType::new("Ext.Template"));

    codegen.add_source_dir(manifest_dir.join("src"))?;
    codegen.write_to_file(out_dir.join("ext-config.d.ts"))?;

    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
