use crate::loc;
use crate::types::NamedTypeAnnotation;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// A directive definition: either one of the directives GraphQL defines
/// implicitly or one declared in the schema with `directive @name(...)`.
#[derive(Clone, Debug, PartialEq)]
pub enum Directive {
    Custom {
        def_location: loc::SourceLocation,
        description: Option<String>,
        name: String,
        params: IndexMap<String, Parameter>,
        repeatable: bool,
    },
    Deprecated,
    Include,
    Skip,
    SpecifiedBy,
}
impl Directive {
    pub fn name(&self) -> &str {
        match self {
            Self::Custom { name, .. } => name.as_str(),
            Self::Deprecated => "deprecated",
            Self::Include => "include",
            Self::Skip => "skip",
            Self::SpecifiedBy => "specifiedBy",
        }
    }

    /// Look up a declared parameter by name.
    pub fn parameter(&self, name: &str) -> Option<Parameter> {
        let builtin_param = |param_name: &str, type_name: &str, nullable: bool| {
            (name == param_name).then(|| Parameter::builtin(
                param_name,
                TypeAnnotation::Named(NamedTypeAnnotation {
                    nullable,
                    type_name: type_name.to_string(),
                }),
            ))
        };

        match self {
            Self::Custom { params, .. } => params.get(name).cloned(),
            Self::Deprecated => builtin_param("reason", "String", true),
            Self::Include | Self::Skip => builtin_param("if", "Boolean", false),
            Self::SpecifiedBy => builtin_param("url", "String", false),
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom { .. })
    }
}
