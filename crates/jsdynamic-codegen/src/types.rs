//! Type definitions for the declaration generator.

/// The declared type of a configuration property, as it should appear in a
/// TypeScript declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropType {
    // Primitives
    String,
    Number,
    Boolean,
    Null,

    /// Any value; the property is not checked.
    Any,
    /// A nested configuration object.
    Object,
    /// A function reference.
    Function,

    // Containers
    Array(Box<PropType>),
    Nullable(Box<PropType>),
    Union(Vec<PropType>),

    /// Reference to another named declaration (e.g. another shape).
    Named(String),

    /// A registry-provided type written as a template such as `"{0} | {1}"`.
    External(ExternalType),
}

/// A templated TypeScript type with positional placeholders.
///
/// `{0}`, `{1}`, ... in the template are replaced by the TypeScript form of
/// the corresponding entry in `params`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalType {
    pub template: String,
    pub params: Vec<PropType>,
}

impl PropType {
    pub fn string() -> Self {
        PropType::String
    }

    pub fn number() -> Self {
        PropType::Number
    }

    pub fn boolean() -> Self {
        PropType::Boolean
    }

    pub fn any() -> Self {
        PropType::Any
    }

    pub fn object() -> Self {
        PropType::Object
    }

    pub fn function() -> Self {
        PropType::Function
    }

    pub fn array(inner: PropType) -> Self {
        PropType::Array(Box::new(inner))
    }

    pub fn nullable(inner: PropType) -> Self {
        PropType::Nullable(Box::new(inner))
    }

    pub fn union(members: Vec<PropType>) -> Self {
        PropType::Union(members)
    }

    pub fn named(name: impl Into<String>) -> Self {
        PropType::Named(name.into())
    }

    /// Create a template type, e.g. `PropType::new("{0} | {1}")`.
    ///
    /// A template without placeholders is used verbatim, which also makes
    /// this the way to carry a ready-made TypeScript type string.
    pub fn new(template: impl Into<String>) -> Self {
        PropType::External(ExternalType {
            template: template.into(),
            params: Vec::new(),
        })
    }

    /// Number of type parameters this type expects.
    ///
    /// Counts the distinct `{N}` placeholders of a template; zero for every
    /// other variant.
    pub fn arity(&self) -> usize {
        let PropType::External(ext) = self else {
            return 0;
        };
        let mut arity = 0;
        while ext.template.contains(&format!("{{{arity}}}")) {
            arity += 1;
        }
        arity
    }

    /// Fill a template's type parameters. Non-template types are returned
    /// unchanged.
    pub fn resolve(&self, params: Vec<PropType>) -> PropType {
        match self {
            PropType::External(ext) => PropType::External(ExternalType {
                template: ext.template.clone(),
                params,
            }),
            other => other.clone(),
        }
    }

    /// Generate the TypeScript type for this property type.
    pub fn to_ts_type(&self) -> String {
        match self {
            PropType::String => "string".to_string(),
            PropType::Number => "number".to_string(),
            PropType::Boolean => "boolean".to_string(),
            PropType::Null => "null".to_string(),
            PropType::Any => "any".to_string(),
            PropType::Object => "object".to_string(),
            PropType::Function => "Function".to_string(),

            PropType::Array(inner) => {
                let inner = inner.to_ts_type();
                if inner.contains(' ') {
                    format!("({inner})[]")
                } else {
                    format!("{inner}[]")
                }
            }
            PropType::Nullable(inner) => format!("{} | null", inner.to_ts_type()),
            PropType::Union(members) => {
                let types: Vec<_> = members.iter().map(|t| t.to_ts_type()).collect();
                types.join(" | ")
            }

            PropType::Named(name) => name.clone(),

            PropType::External(ext) => {
                let mut output = ext.template.clone();
                for (i, param) in ext.params.iter().enumerate() {
                    output = output.replace(&format!("{{{i}}}"), &param.to_ts_type());
                }
                output
            }
        }
    }

    /// Generate the JSDoc type expression for this property type.
    pub fn to_jsdoc_type(&self) -> String {
        match self {
            PropType::Object => "Object".to_string(),
            PropType::Any => "*".to_string(),
            PropType::Array(inner) => format!("Array<{}>", inner.to_jsdoc_type()),
            PropType::Nullable(inner) => format!("?{}", inner.to_jsdoc_type()),
            PropType::Union(members) => {
                let types: Vec<_> = members.iter().map(|t| t.to_jsdoc_type()).collect();
                format!("({})", types.join("|"))
            }
            other => other.to_ts_type(),
        }
    }

    /// Collect the names of other declarations this type refers to.
    pub fn collect_named_deps(&self, deps: &mut std::collections::HashSet<String>) {
        match self {
            PropType::Named(name) => {
                deps.insert(name.clone());
            }
            PropType::Array(inner) | PropType::Nullable(inner) => inner.collect_named_deps(deps),
            PropType::Union(members) => {
                for member in members {
                    member.collect_named_deps(deps);
                }
            }
            PropType::External(ext) => {
                for param in &ext.params {
                    param.collect_named_deps(deps);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_primitive_ts_types() {
        assert_eq!(PropType::string().to_ts_type(), "string");
        assert_eq!(PropType::number().to_ts_type(), "number");
        assert_eq!(PropType::boolean().to_ts_type(), "boolean");
        assert_eq!(PropType::function().to_ts_type(), "Function");
        assert_eq!(PropType::any().to_ts_type(), "any");
    }

    #[test]
    fn test_container_ts_types() {
        assert_eq!(PropType::array(PropType::number()).to_ts_type(), "number[]");
        assert_eq!(
            PropType::nullable(PropType::string()).to_ts_type(),
            "string | null"
        );
        assert_eq!(
            PropType::array(PropType::union(vec![PropType::string(), PropType::object()]))
                .to_ts_type(),
            "(string | object)[]"
        );
    }

    #[test]
    fn test_template_resolution() {
        let either = PropType::new("{0} | {1}");
        assert_eq!(either.arity(), 2);
        let resolved = either.resolve(vec![PropType::boolean(), PropType::object()]);
        assert_eq!(resolved.to_ts_type(), "boolean | object");
    }

    #[test]
    fn test_plain_template_has_no_arity() {
        let store = PropType::new("Ext.data.Store");
        assert_eq!(store.arity(), 0);
        assert_eq!(store.to_ts_type(), "Ext.data.Store");
        assert_eq!(PropType::string().arity(), 0);
    }

    #[test]
    fn test_jsdoc_types() {
        assert_eq!(PropType::array(PropType::any()).to_jsdoc_type(), "Array<*>");
        assert_eq!(
            PropType::nullable(PropType::number()).to_jsdoc_type(),
            "?number"
        );
        assert_eq!(
            PropType::union(vec![PropType::string(), PropType::object()]).to_jsdoc_type(),
            "(string|Object)"
        );
    }

    #[test]
    fn test_named_deps() {
        let ty = PropType::array(PropType::new("{0} | {1}").resolve(vec![
            PropType::named("QuickTipConfig"),
            PropType::string(),
        ]));
        let mut deps = HashSet::new();
        ty.collect_named_deps(&mut deps);
        assert!(deps.contains("QuickTipConfig"));
        assert_eq!(deps.len(), 1);
    }
}
