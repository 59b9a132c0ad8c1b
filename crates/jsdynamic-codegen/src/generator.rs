//! TypeScript declaration generator for config shapes.

use crate::registry::TypeRegistry;
use crate::types::PropType;
use jsdynamic::{ConfigShape, LiteralWriter, Value};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// One declared property of a shape.
#[derive(Debug, Clone)]
pub(crate) struct PropertyEntry {
    /// Bag key in the JavaScript spelling.
    pub key: String,
    pub ty: PropType,
    pub doc: Option<String>,
}

/// A named config shape.
#[derive(Debug, Clone)]
pub(crate) struct ShapeEntry {
    /// The Rust type name (e.g. `"ButtonConfig"`), used as the interface name.
    pub name: String,
    /// The widget class the shape configures (e.g. `"Ext.Button"`).
    pub js_name: Option<String>,
    pub doc: Option<String>,
    pub properties: Vec<PropertyEntry>,
}

impl ShapeEntry {
    fn new(name: String, js_name: Option<String>, properties: Vec<PropertyEntry>) -> Self {
        Self {
            name,
            js_name,
            doc: None,
            properties,
        }
    }

    /// Doc text for the declaration, falling back to the widget class name.
    fn summary(&self) -> Option<String> {
        self.doc.clone().or_else(|| {
            self.js_name
                .as_ref()
                .map(|js| format!("Configuration object for `{js}`."))
        })
    }
}

/// Code generator that collects config shapes and outputs TypeScript
/// declarations for them.
///
/// Every property is emitted as optional, since a configuration object only
/// carries the options that were set.
///
/// # Example
///
/// ```
/// use jsdynamic_codegen::{DeclarationGenerator, PropType};
///
/// let mut generator = DeclarationGenerator::new();
/// generator.add_shape("ButtonConfig", Some("Ext.Button"), &[
///     ("text", PropType::string()),
///     ("minWidth", PropType::number()),
/// ]);
///
/// let code = generator.generate();
/// assert!(code.contains("export interface ButtonConfig {"));
/// assert!(code.contains("  minWidth?: number;"));
/// ```
#[derive(Debug)]
pub struct DeclarationGenerator {
    /// All shapes, keyed by shape name.
    shapes: BTreeMap<String, ShapeEntry>,

    /// Custom header comment
    header: Option<String>,

    /// Whether to emit TypeScript syntax (`export interface`).
    ///
    /// When `false`, JSDoc `@typedef` comments are emitted instead, usable
    /// from plain `.js` files.
    allow_typescript_syntax: bool,

    /// Type registry for resolving Rust type paths found in sources
    pub(crate) registry: TypeRegistry,
}

impl Default for DeclarationGenerator {
    fn default() -> Self {
        Self {
            shapes: BTreeMap::new(),
            header: None,
            allow_typescript_syntax: true,
            registry: TypeRegistry::with_builtins(),
        }
    }
}

impl DeclarationGenerator {
    /// Create a new generator with the built-in type mappings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom header comment for the generated file.
    pub fn set_header(&mut self, header: impl Into<String>) -> &mut Self {
        self.header = Some(header.into());
        self
    }

    /// Enable or disable TypeScript-specific syntax in the generated output.
    ///
    /// When `true` (the default), shapes become `export interface`
    /// declarations. When `false`, they become JSDoc `@typedef` blocks.
    pub fn allow_typescript_syntax(&mut self, enabled: bool) -> &mut Self {
        self.allow_typescript_syntax = enabled;
        self
    }

    /// Register a custom type in the type registry.
    ///
    /// The extractor consults the registry for every non-primitive type it
    /// meets in a `config_shape!` declaration.
    pub fn register_type(&mut self, name: impl Into<String>, ty: PropType) -> &mut Self {
        self.registry.register(name, ty);
        self
    }

    /// Remove a type mapping from the registry.
    pub fn unregister_type(&mut self, name: &str) -> &mut Self {
        self.registry.unregister(name);
        self
    }

    /// Get a reference to the type registry.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Add a shape from a list of `(key, type)` pairs.
    ///
    /// Adding a shape under an existing name replaces it.
    pub fn add_shape(
        &mut self,
        name: impl Into<String>,
        js_name: Option<&str>,
        properties: &[(impl AsRef<str>, PropType)],
    ) -> &mut Self {
        let name = name.into();
        let properties = properties
            .iter()
            .map(|(key, ty)| PropertyEntry {
                key: key.as_ref().to_string(),
                ty: ty.clone(),
                doc: None,
            })
            .collect();
        self.shapes.insert(
            name.clone(),
            ShapeEntry::new(name, js_name.map(str::to_string), properties),
        );
        self
    }

    /// Add a shape from a compiled [`ConfigShape`] implementation.
    ///
    /// The declaration uses the shape's runtime schema; property types are
    /// taken from [`PropertyDecl::js_type`](jsdynamic::PropertyDecl::js_type).
    pub fn add_shape_of<S: ConfigShape>(&mut self) -> &mut Self {
        let name = std::any::type_name::<S>()
            .rsplit("::")
            .next()
            .unwrap_or_default()
            .to_string();
        let properties = S::PROPERTIES
            .iter()
            .map(|decl| PropertyEntry {
                key: decl.name.to_string(),
                ty: PropType::new(decl.js_type()),
                doc: None,
            })
            .collect();
        self.shapes.insert(
            name.clone(),
            ShapeEntry::new(name, Some(S::JS_NAME.to_string()), properties),
        );
        self
    }

    /// Set the doc comment of a shape. Ignored if the shape doesn't exist.
    pub fn set_shape_doc(&mut self, name: &str, doc: impl Into<String>) -> &mut Self {
        if let Some(entry) = self.shapes.get_mut(name) {
            entry.doc = Some(doc.into());
        }
        self
    }

    /// Set the doc comment of one property. Ignored if either doesn't exist.
    pub fn set_property_doc(&mut self, name: &str, key: &str, doc: impl Into<String>) -> &mut Self {
        if let Some(prop) = self
            .shapes
            .get_mut(name)
            .and_then(|entry| entry.properties.iter_mut().find(|p| p.key == key))
        {
            prop.doc = Some(doc.into());
        }
        self
    }

    pub(crate) fn insert_shape(&mut self, entry: ShapeEntry) {
        self.shapes.insert(entry.name.clone(), entry);
    }

    /// Names of the collected shapes, in output order.
    pub fn shape_names(&self) -> impl Iterator<Item = &str> {
        self.shapes.keys().map(String::as_str)
    }

    /// Named types referenced by some property that no collected shape
    /// declares.
    pub fn unresolved_names(&self) -> BTreeSet<String> {
        let mut deps = HashSet::new();
        for entry in self.shapes.values() {
            for prop in &entry.properties {
                prop.ty.collect_named_deps(&mut deps);
            }
        }
        deps.into_iter()
            .filter(|name| !self.shapes.contains_key(name))
            .collect()
    }

    /// Generate the declaration file as a string.
    pub fn generate(&self) -> String {
        let mut output = String::new();

        // Header
        output.push_str("/**\n");
        match &self.header {
            Some(header) => {
                for line in header.lines() {
                    output.push_str(" * ");
                    output.push_str(line);
                    output.push('\n');
                }
            }
            None => {
                output.push_str(" * Auto-generated by jsdynamic-codegen\n");
                output.push_str(" * DO NOT EDIT MANUALLY\n");
            }
        }
        output.push_str(" */\n\n");

        for name in self.unresolved_names() {
            tracing::warn!(name = %name, "property type refers to an undeclared shape");
        }

        for entry in self.shapes.values() {
            let code = if self.allow_typescript_syntax {
                self.generate_interface(entry)
            } else {
                self.generate_typedef(entry)
            };
            output.push_str(&code);
            output.push_str("\n\n");
        }

        output.trim_end().to_string() + "\n"
    }

    /// Write the generated code to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let code = self.generate();
        fs::write(path, code)
    }

    /// Write the generated code to a writer.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        let code = self.generate();
        writer.write_all(code.as_bytes())
    }

    fn generate_interface(&self, entry: &ShapeEntry) -> String {
        let mut output = String::new();
        if let Some(summary) = entry.summary() {
            push_doc_block(&mut output, &summary, "");
        }
        output.push_str(&format!("export interface {} {{\n", entry.name));
        for prop in &entry.properties {
            if let Some(doc) = &prop.doc {
                push_doc_block(&mut output, doc, "  ");
            }
            output.push_str(&format!(
                "  {}?: {};\n",
                property_key(&prop.key),
                prop.ty.to_ts_type()
            ));
        }
        output.push('}');
        output
    }

    fn generate_typedef(&self, entry: &ShapeEntry) -> String {
        let mut output = String::from("/**\n");
        if let Some(summary) = entry.summary() {
            for line in summary.lines() {
                output.push_str(&format!(" * {}\n", line.trim()));
            }
        }
        output.push_str(&format!(" * @typedef {{Object}} {}\n", entry.name));
        for prop in &entry.properties {
            let doc = prop
                .doc
                .as_deref()
                .map(|d| format!(" {}", d.lines().next().unwrap_or_default().trim()))
                .unwrap_or_default();
            output.push_str(&format!(
                " * @property {{{}}} [{}]{}\n",
                prop.ty.to_jsdoc_type(),
                prop.key,
                doc
            ));
        }
        output.push_str(" */");
        output
    }
}

/// Emit `text` as a `/** ... */` block at the given indentation.
fn push_doc_block(output: &mut String, text: &str, indent: &str) {
    let lines: Vec<_> = text.lines().map(str::trim).collect();
    if lines.len() == 1 {
        output.push_str(&format!("{indent}/** {} */\n", lines[0]));
        return;
    }
    output.push_str(&format!("{indent}/**\n"));
    for line in lines {
        output.push_str(&format!("{indent} * {line}\n"));
    }
    output.push_str(&format!("{indent} */\n"));
}

/// Quote property keys that are not plain identifiers.
fn property_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        key.to_string()
    } else {
        // JSON string syntax is also a valid TypeScript property name.
        LiteralWriter::new().write_value(&Value::from(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsdynamic::{Either, FunctionRef, PropertyBag, config_shape};

    config_shape! {
        struct SampleConfig("Ext.Sample") {
            "text" => text / set_text: String,
            "tooltip" => tooltip / set_tooltip: Either<String, PropertyBag>,
            "handler" => handler / set_handler: FunctionRef,
            "mouseOffset" => mouse_offset / set_mouse_offset: Vec<f64>,
        }
    }

    #[test]
    fn test_generate_simple_shape() {
        let mut codegen = DeclarationGenerator::new();
        codegen.add_shape(
            "ButtonConfig",
            Some("Ext.Button"),
            &[("text", PropType::string()), ("disabled", PropType::boolean())],
        );

        let code = codegen.generate();
        assert!(code.starts_with("/**\n * Auto-generated by jsdynamic-codegen\n"));
        assert!(code.contains("/** Configuration object for `Ext.Button`. */\n"));
        assert!(code.contains("export interface ButtonConfig {\n"));
        assert!(code.contains("  text?: string;\n"));
        assert!(code.contains("  disabled?: boolean;\n"));
        assert!(code.ends_with("}\n"));
    }

    #[test]
    fn test_generate_from_compiled_shape() {
        let mut codegen = DeclarationGenerator::new();
        codegen.add_shape_of::<SampleConfig>();

        let code = codegen.generate();
        assert!(code.contains("export interface SampleConfig {"));
        assert!(code.contains("  tooltip?: string | object;"));
        assert!(code.contains("  handler?: Function;"));
        assert!(code.contains("  mouseOffset?: number[];"));
        assert!(code.contains("`Ext.Sample`"));
    }

    #[test]
    fn test_quoted_keys() {
        let mut codegen = DeclarationGenerator::new();
        codegen.add_shape("Odd", None, &[("data-id", PropType::string())]);
        let code = codegen.generate();
        assert!(code.contains("  \"data-id\"?: string;"));
    }

    #[test]
    fn test_quoted_keys_escape_control_characters() {
        let mut codegen = DeclarationGenerator::new();
        codegen.add_shape(
            "Odd",
            None,
            &[("a\u{1f}b", PropType::string()), ("say \"hi\"", PropType::boolean())],
        );
        let code = codegen.generate();
        assert!(code.contains("  \"a\\u001fb\"?: string;"));
        assert!(code.contains("  \"say \\\"hi\\\"\"?: boolean;"));
        assert!(!code.contains("\\u{1f}"));
    }

    #[test]
    fn test_docs_are_emitted() {
        let mut codegen = DeclarationGenerator::new();
        codegen.add_shape("TipConfig", None, &[("showDelay", PropType::number())]);
        codegen.set_shape_doc("TipConfig", "Tooltip options.\nShown on hover.");
        codegen.set_property_doc("TipConfig", "showDelay", "Delay in ms.");
        codegen.set_property_doc("TipConfig", "missing", "ignored");

        let code = codegen.generate();
        assert!(code.contains("/**\n * Tooltip options.\n * Shown on hover.\n */\n"));
        assert!(code.contains("  /** Delay in ms. */\n  showDelay?: number;"));
        assert!(!code.contains("ignored"));
    }

    #[test]
    fn test_js_mode_emits_typedef() {
        let mut codegen = DeclarationGenerator::new();
        codegen.allow_typescript_syntax(false);
        codegen.add_shape(
            "ButtonConfig",
            Some("Ext.Button"),
            &[
                ("text", PropType::string()),
                ("plugins", PropType::array(PropType::any())),
            ],
        );
        codegen.set_property_doc("ButtonConfig", "text", "The button text");

        let code = codegen.generate();
        assert!(!code.contains("export interface"));
        assert!(code.contains(" * @typedef {Object} ButtonConfig\n"));
        assert!(code.contains(" * @property {string} [text] The button text\n"));
        assert!(code.contains(" * @property {Array<*>} [plugins]\n"));
    }

    #[test]
    fn test_custom_header() {
        let mut codegen = DeclarationGenerator::new();
        codegen.set_header("ExtJS bindings\nGenerated from src/");
        let code = codegen.generate();
        assert!(code.starts_with("/**\n * ExtJS bindings\n * Generated from src/\n */\n"));
        assert!(!code.contains("DO NOT EDIT"));
    }

    #[test]
    fn test_unresolved_names() {
        let mut codegen = DeclarationGenerator::new();
        codegen.add_shape("Tip", None, &[("x", PropType::number())]);
        codegen.add_shape(
            "Button",
            None,
            &[
                ("tip", PropType::named("Tip")),
                ("menu", PropType::named("MenuConfig")),
            ],
        );
        let unresolved: Vec<_> = codegen.unresolved_names().into_iter().collect();
        assert_eq!(unresolved, ["MenuConfig"]);
    }

    #[test]
    fn test_shapes_sorted_by_name() {
        let mut codegen = DeclarationGenerator::new();
        codegen.add_shape("Zeta", None, &[("a", PropType::any())]);
        codegen.add_shape("Alpha", None, &[("a", PropType::any())]);
        assert_eq!(codegen.shape_names().collect::<Vec<_>>(), ["Alpha", "Zeta"]);
        let code = codegen.generate();
        assert!(code.find("interface Alpha").unwrap() < code.find("interface Zeta").unwrap());
    }
}
