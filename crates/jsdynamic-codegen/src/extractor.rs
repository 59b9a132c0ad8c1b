//! Source file parser that extracts `config_shape!` declarations.
//!
//! The extractor scans Rust source files for invocations of
//! `jsdynamic::config_shape!` and turns each one into a declaration on the
//! [`DeclarationGenerator`]. Doc comments on the shape and on its properties
//! are carried over.
//!
//! Type resolution for non-primitive types is handled by the
//! [`TypeRegistry`](crate::registry::TypeRegistry) on the generator, so
//! supporting a new opaque type requires no changes here.
//!
//! ## Use-item analysis
//!
//! `use` statements in each file are flattened into a map from local names to
//! fully-qualified paths:
//!
//! - `use jsdynamic::PropertyBag` maps `"PropertyBag"` to `"jsdynamic::PropertyBag"`
//! - `use jsdynamic::PropertyBag as Bag` maps `"Bag"` to `"jsdynamic::PropertyBag"`
//! - `use jsdynamic::config_shape as shape` maps `"shape"` to
//!   `"jsdynamic::config_shape"`, which is then recognized as the marker macro.

use crate::DeclarationGenerator;
use crate::generator::{PropertyEntry, ShapeEntry};
use crate::types::PropType;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use syn::parse::{Parse, ParseStream};
use syn::{
    Attribute, GenericArgument, Ident, LitStr, PathArguments, Token, Type, TypePath, UseTree,
    Visibility,
};
use walkdir::WalkDir;

/// Per-file context built from `use` items.
#[derive(Clone, Default)]
struct SourceContext {
    /// Maps local name -> fully-qualified path.
    ///
    /// Glob imports are not tracked since they can't be resolved statically.
    imports: HashMap<String, String>,
}

/// Recursively flatten a `UseTree` into import entries.
fn collect_imports(tree: &UseTree, prefix: &[String], imports: &mut HashMap<String, String>) {
    match tree {
        UseTree::Path(p) => {
            let mut new_prefix = prefix.to_vec();
            new_prefix.push(p.ident.to_string());
            collect_imports(&p.tree, &new_prefix, imports);
        }
        UseTree::Name(n) => {
            let name = n.ident.to_string();
            let full_path = make_full_path(prefix, &name);
            imports.insert(name, full_path);
        }
        UseTree::Rename(r) => {
            let full_path = make_full_path(prefix, &r.ident.to_string());
            imports.insert(r.rename.to_string(), full_path);
        }
        UseTree::Glob(_) => {}
        UseTree::Group(g) => {
            for item in &g.items {
                collect_imports(item, prefix, imports);
            }
        }
    }
}

fn make_full_path(prefix: &[String], name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}::{}", prefix.join("::"), name)
    }
}

fn path_to_string(path: &syn::Path) -> String {
    path.segments
        .iter()
        .map(|s| s.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}

/// Extend `ctx` with the `use` items and type aliases of one item list.
fn extend_source_context(ctx: &mut SourceContext, items: &[syn::Item]) {
    for item in items {
        match item {
            syn::Item::Use(item_use) => {
                collect_imports(&item_use.tree, &[], &mut ctx.imports);
            }
            // `type Bag = jsdynamic::PropertyBag` maps "Bag" to "jsdynamic::PropertyBag"
            syn::Item::Type(item_type) => {
                if let Type::Path(TypePath { path, .. }) = &*item_type.ty
                    && path.segments.len() > 1
                {
                    ctx.imports
                        .insert(item_type.ident.to_string(), path_to_string(path));
                }
            }
            _ => {}
        }
    }
}

/// The fully-qualified macro path that triggers shape extraction.
const MARKER: &str = "jsdynamic::config_shape";

/// Check whether a macro invocation path names the shape macro.
///
/// Recognizes:
/// - `config_shape!` when `use jsdynamic::config_shape` is in scope
/// - `jsdynamic::config_shape!` or any qualified path ending in `::config_shape`
/// - an alias introduced by `use jsdynamic::config_shape as alias`
fn is_marker_macro(path: &syn::Path, ctx: &SourceContext) -> bool {
    if path.segments.len() == 1 {
        let ident = path.segments[0].ident.to_string();
        ctx.imports.get(&ident).is_some_and(|p| p == MARKER)
    } else {
        let qualified = path_to_string(path);
        qualified == MARKER || qualified.ends_with("::config_shape")
    }
}

/// One parsed `config_shape!` invocation.
struct ShapeInvocation {
    attrs: Vec<Attribute>,
    ident: Ident,
    js_name: LitStr,
    properties: Vec<PropertyInvocation>,
}

/// One `"jsName" => getter / setter: Type` line.
struct PropertyInvocation {
    attrs: Vec<Attribute>,
    key: LitStr,
    ty: Type,
}

impl Parse for ShapeInvocation {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let _vis: Visibility = input.parse()?;
        input.parse::<Token![struct]>()?;
        let ident: Ident = input.parse()?;

        let js_name_content;
        syn::parenthesized!(js_name_content in input);
        let js_name: LitStr = js_name_content.parse()?;

        let body;
        syn::braced!(body in input);
        let mut properties = Vec::new();
        while !body.is_empty() {
            let attrs = body.call(Attribute::parse_outer)?;
            let key: LitStr = body.parse()?;
            body.parse::<Token![=>]>()?;
            let _getter: Ident = body.parse()?;
            body.parse::<Token![/]>()?;
            let _setter: Ident = body.parse()?;
            body.parse::<Token![:]>()?;
            let ty: Type = body.parse()?;
            properties.push(PropertyInvocation { attrs, key, ty });

            if body.is_empty() {
                break;
            }
            body.parse::<Token![,]>()?;
        }

        Ok(Self {
            attrs,
            ident,
            js_name,
            properties,
        })
    }
}

/// Join the `///` doc lines of an attribute list.
fn extract_doc(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| {
            if let syn::Meta::NameValue(nv) = &attr.meta
                && let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(s),
                    ..
                }) = &nv.value
            {
                Some(s.value().trim().to_string())
            } else {
                None
            }
        })
        .collect();

    let doc = lines.join("\n").trim().to_string();
    (!doc.is_empty()).then_some(doc)
}

/// Convert a syn Type to a [`PropType`], using the type registry and import map.
fn type_to_prop_type(
    ty: &Type,
    codegen: &DeclarationGenerator,
    ctx: &SourceContext,
) -> Option<PropType> {
    match ty {
        Type::Path(TypePath { path, .. }) => {
            let segment = path.segments.last()?;
            let raw_ident = segment.ident.to_string();

            let full_path = if path.segments.len() > 1 {
                path_to_string(path)
            } else {
                ctx.imports
                    .get(&raw_ident)
                    .cloned()
                    .unwrap_or_else(|| raw_ident.clone())
            };

            match full_path.as_str() {
                "u8" | "i8" | "u16" | "i16" | "u32" | "i32" | "f32" | "f64" => {
                    Some(PropType::number())
                }
                "bool" => Some(PropType::boolean()),
                "String" | "std::string::String" => Some(PropType::string()),

                "Vec" | "std::vec::Vec" => {
                    let inner = get_single_generic_arg(segment)?;
                    Some(PropType::array(type_to_prop_type(inner, codegen, ctx)?))
                }
                "Option" | "std::option::Option" => {
                    let inner = get_single_generic_arg(segment)?;
                    Some(PropType::nullable(type_to_prop_type(inner, codegen, ctx)?))
                }
                "Box" | "std::boxed::Box" => {
                    let inner = get_single_generic_arg(segment)?;
                    type_to_prop_type(inner, codegen, ctx)
                }

                _ => {
                    if let Some(template) = codegen.registry.get(&full_path) {
                        let arity = template.arity();
                        let params = if arity == 0 {
                            vec![]
                        } else {
                            let resolved: Option<Vec<_>> = collect_type_args(segment)
                                .into_iter()
                                .take(arity)
                                .map(|ty| type_to_prop_type(ty, codegen, ctx))
                                .collect();
                            resolved?
                        };
                        Some(template.resolve(params))
                    } else {
                        Some(PropType::named(raw_ident))
                    }
                }
            }
        }
        Type::Reference(reference) => {
            if let Type::Path(TypePath { path, .. }) = &*reference.elem
                && path.is_ident("str")
            {
                return Some(PropType::string());
            }
            type_to_prop_type(&reference.elem, codegen, ctx)
        }
        Type::Paren(paren) => type_to_prop_type(&paren.elem, codegen, ctx),
        _ => None,
    }
}

fn get_single_generic_arg(segment: &syn::PathSegment) -> Option<&Type> {
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => match args.args.first()? {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        },
        _ => None,
    }
}

/// Collect the type arguments of a path segment, skipping lifetimes and
/// const generics.
fn collect_type_args(segment: &syn::PathSegment) -> Vec<&Type> {
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return vec![];
    };
    args.args
        .iter()
        .filter_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        })
        .collect()
}

fn process_invocation(
    codegen: &mut DeclarationGenerator,
    invocation: &ShapeInvocation,
    ctx: &SourceContext,
) {
    let name = invocation.ident.to_string();
    let mut properties = Vec::with_capacity(invocation.properties.len());

    for prop in &invocation.properties {
        let key = prop.key.value();
        let Some(ty) = type_to_prop_type(&prop.ty, codegen, ctx) else {
            tracing::warn!(shape = %name, key = %key, "unsupported property type, shape skipped");
            return;
        };
        properties.push(PropertyEntry {
            key,
            ty,
            doc: extract_doc(&prop.attrs),
        });
    }

    tracing::debug!(shape = %name, properties = properties.len(), "extracted config shape");
    codegen.insert_shape(ShapeEntry {
        name,
        js_name: Some(invocation.js_name.value()),
        doc: extract_doc(&invocation.attrs),
        properties,
    });
}

fn process_items(codegen: &mut DeclarationGenerator, items: &[syn::Item], parent: &SourceContext) {
    let mut ctx = parent.clone();
    extend_source_context(&mut ctx, items);

    for item in items {
        match item {
            syn::Item::Macro(item_macro) if is_marker_macro(&item_macro.mac.path, &ctx) => {
                match item_macro.mac.parse_body::<ShapeInvocation>() {
                    Ok(invocation) => process_invocation(codegen, &invocation, &ctx),
                    Err(err) => {
                        tracing::warn!(error = %err, "malformed config_shape! invocation skipped");
                    }
                }
            }
            syn::Item::Mod(item_mod) => {
                if let Some((_, content)) = &item_mod.content {
                    process_items(codegen, content, &ctx);
                }
            }
            _ => {}
        }
    }
}

fn parse_source_file(codegen: &mut DeclarationGenerator, source: &str) {
    let file = match syn::parse_file(source) {
        Ok(f) => f,
        Err(err) => {
            tracing::warn!(error = %err, "source file could not be parsed");
            return;
        }
    };

    process_items(codegen, &file.items, &SourceContext::default());
}

impl DeclarationGenerator {
    /// Parse a single Rust source file and extract its `config_shape!`
    /// declarations.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn main() -> Result<(), std::io::Error> {
    /// use jsdynamic_codegen::DeclarationGenerator;
    ///
    /// let mut generator = DeclarationGenerator::new();
    /// generator.add_source_file("src/button.rs")?;
    /// generator.write_to_file("config.d.ts")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn add_source_file(&mut self, path: impl AsRef<Path>) -> std::io::Result<&mut Self> {
        let source = fs::read_to_string(path)?;
        parse_source_file(self, &source);
        Ok(self)
    }

    /// Parse Rust source from a string and extract its `config_shape!`
    /// declarations.
    pub fn add_source_str(&mut self, source: &str) -> &mut Self {
        parse_source_file(self, source);
        self
    }

    /// Recursively scan a directory for `.rs` files and extract shapes.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn main() -> Result<(), std::io::Error> {
    /// use jsdynamic_codegen::DeclarationGenerator;
    ///
    /// let mut generator = DeclarationGenerator::new();
    /// generator.add_source_dir("src/")?;
    /// generator.write_to_file("config.d.ts")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn add_source_dir(&mut self, path: impl AsRef<Path>) -> std::io::Result<&mut Self> {
        for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.extension().is_some_and(|e| e == "rs") {
                let source = fs::read_to_string(path)?;
                parse_source_file(self, &source);
            }
        }
        Ok(self)
    }
}
