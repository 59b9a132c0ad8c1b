//! Rendering of property bags as JavaScript object literals.
//!
//! Unlike JSON, a JavaScript literal can carry function references, so this
//! is the lossless handoff format for configuration objects.

use crate::{PropertyBag, Value};

/// Writes [`PropertyBag`]s and [`Value`]s as JavaScript source text.
///
/// # Example
///
/// ```
/// use jsdynamic::{FunctionRef, LiteralWriter, PropertyBag};
///
/// let mut bag = PropertyBag::new();
/// bag.set("text", "OK");
/// bag.set("handler", FunctionRef::new("onOk"));
///
/// assert_eq!(LiteralWriter::new().write(&bag), r#"{text: "OK", handler: onOk}"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LiteralWriter {
    /// Spaces per nesting level; `None` renders everything on one line.
    indent: Option<usize>,
}

impl LiteralWriter {
    /// Create a writer producing compact, single-line output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width. `None` (the default) disables line breaks.
    pub fn indent(&mut self, indent: Option<usize>) -> &mut Self {
        self.indent = indent;
        self
    }

    /// Render a bag as an object literal.
    pub fn write(&self, bag: &PropertyBag) -> String {
        let mut output = String::new();
        self.write_object(&mut output, bag, 0);
        output
    }

    /// Render a single value.
    pub fn write_value(&self, value: &Value) -> String {
        let mut output = String::new();
        self.write_value_into(&mut output, value, 0);
        output
    }

    fn write_value_into(&self, output: &mut String, value: &Value, depth: usize) {
        match value {
            Value::Null => output.push_str("null"),
            Value::Bool(b) => output.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => output.push_str(&format_number(*n)),
            Value::String(s) => output.push_str(&quote(s)),
            Value::Array(items) => self.write_array(output, items, depth),
            Value::Object(bag) => self.write_object(output, bag, depth),
            Value::Function(func) => output.push_str(func.expr()),
        }
    }

    fn write_object(&self, output: &mut String, bag: &PropertyBag, depth: usize) {
        if bag.is_empty() {
            output.push_str("{}");
            return;
        }
        output.push('{');
        for (i, (key, value)) in bag.iter().enumerate() {
            if i > 0 {
                output.push_str(if self.indent.is_some() { "," } else { ", " });
            }
            self.break_line(output, depth + 1);
            if is_identifier(key) {
                output.push_str(key);
            } else {
                output.push_str(&quote(key));
            }
            output.push_str(": ");
            self.write_value_into(output, value, depth + 1);
        }
        self.break_line(output, depth);
        output.push('}');
    }

    fn write_array(&self, output: &mut String, items: &[Value], depth: usize) {
        if items.is_empty() {
            output.push_str("[]");
            return;
        }
        output.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                output.push_str(if self.indent.is_some() { "," } else { ", " });
            }
            self.break_line(output, depth + 1);
            self.write_value_into(output, item, depth + 1);
        }
        self.break_line(output, depth);
        output.push(']');
    }

    /// Newline plus indentation; a no-op in compact mode.
    fn break_line(&self, output: &mut String, depth: usize) {
        if let Some(width) = self.indent {
            output.push('\n');
            output.push_str(&" ".repeat(width * depth));
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Quote a string as a JavaScript string literal. JSON string escaping is a
/// valid subset of JavaScript's.
fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

/// Whether `key` can appear unquoted as a property name.
fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
