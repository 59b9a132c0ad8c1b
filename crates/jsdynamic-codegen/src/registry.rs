//! Type registry for mapping Rust type paths to TypeScript property types.
//!
//! The registry provides a data-driven way to teach the extractor how to
//! handle types that are not Rust primitives. Built-in mappings for the
//! `jsdynamic` value types are registered automatically, and users can add
//! mappings for their own opaque types.

use std::collections::HashMap;

use crate::types::PropType;

/// A registry of fully-qualified Rust type path -> [`PropType`] template
/// associations.
///
/// Each entry is a `PropType`; templates created with [`PropType::new`] take
/// as many type parameters as they have `{N}` placeholders, and the extractor
/// resolves those from the generic arguments found in the source.
///
/// # Built-in mappings
///
/// | Rust type | TypeScript type |
/// |-----------|-----------------|
/// | `jsdynamic::Value` | `any` |
/// | `jsdynamic::PropertyBag` | `object` |
/// | `jsdynamic::FunctionRef` | `Function` |
/// | `jsdynamic::Either<L, R>` | `L \| R` |
///
/// # Custom mappings
///
/// ```
/// use jsdynamic_codegen::{DeclarationGenerator, PropType};
///
/// let mut generator = DeclarationGenerator::new();
/// generator.register_type("app::StoreRef", PropType::new("Ext.data.Store"));
/// ```
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    mappings: HashMap<String, PropType>,
}

impl TypeRegistry {
    /// Create an empty registry with no mappings.
    pub fn new() -> Self {
        Self {
            mappings: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with the built-in mappings.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_builtins();
        registry
    }

    /// Register the mappings for `jsdynamic`'s own value types.
    pub fn register_builtins(&mut self) {
        self.register("jsdynamic::Value", PropType::any());
        self.register("jsdynamic::PropertyBag", PropType::object());
        self.register("jsdynamic::FunctionRef", PropType::function());
        self.register("jsdynamic::Either", PropType::new("{0} | {1}"));
    }

    /// Register a type for a fully-qualified Rust type path.
    ///
    /// If a mapping already exists for this path, it is replaced.
    pub fn register(&mut self, name: impl Into<String>, ty: PropType) {
        self.mappings.insert(name.into(), ty);
    }

    /// Look up the type template for a fully-qualified Rust type path.
    pub fn get(&self, name: &str) -> Option<&PropType> {
        self.mappings.get(name)
    }

    /// Check if a type path is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.mappings.contains_key(name)
    }

    /// Remove a type mapping.
    pub fn unregister(&mut self, name: &str) -> Option<PropType> {
        self.mappings.remove(name)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_with_builtins() {
        let registry = TypeRegistry::with_builtins();
        assert!(registry.contains("jsdynamic::Value"));
        assert!(registry.contains("jsdynamic::PropertyBag"));
        assert!(registry.contains("jsdynamic::FunctionRef"));
        assert!(registry.contains("jsdynamic::Either"));
        assert!(!registry.contains("NonExistent"));
    }

    #[test]
    fn test_builtin_either() {
        let registry = TypeRegistry::with_builtins();
        let ty = registry
            .get("jsdynamic::Either")
            .unwrap()
            .resolve(vec![PropType::string(), PropType::object()]);
        assert_eq!(ty.to_ts_type(), "string | object");
    }

    #[test]
    fn test_registry_custom_type() {
        let mut registry = TypeRegistry::new();
        registry.register("app::Grid", PropType::new("Ext.grid.GridPanel<{0}>"));

        let template = registry.get("app::Grid").unwrap();
        assert_eq!(template.arity(), 1);
        let ty = template.resolve(vec![PropType::named("Row")]);
        assert_eq!(ty.to_ts_type(), "Ext.grid.GridPanel<Row>");
    }

    #[test]
    fn test_registry_override_builtin() {
        let mut registry = TypeRegistry::with_builtins();
        registry.register("jsdynamic::PropertyBag", PropType::new("Record<string, unknown>"));
        let ty = registry.get("jsdynamic::PropertyBag").unwrap();
        assert_eq!(ty.to_ts_type(), "Record<string, unknown>");
    }

    #[test]
    fn test_registry_unregister() {
        let mut registry = TypeRegistry::with_builtins();
        assert!(registry.unregister("jsdynamic::Value").is_some());
        assert!(!registry.contains("jsdynamic::Value"));
        assert!(registry.unregister("jsdynamic::Value").is_none());
    }
}
