use crate::ast;
use crate::loc;
use crate::types::DeprecationState;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::InternalInvariantError;
use indexmap::IndexMap;
use std::path::Path;

/// An output field declared on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType), or one of the
/// introspection meta-fields (`__typename`, `__schema`, `__type`).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) deprecation_state: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn deprecation_state(&self) -> &DeprecationState {
        &self.deprecation_state
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The parameters declared for this field, in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        ast_field: &ast::schema::Field,
    ) -> Result<Self, InternalInvariantError> {
        Ok(Self {
            def_location: loc::SourceLocation::from_pos(file_path, ast_field.position),
            deprecation_state: DeprecationState::from_ast_directives(&ast_field.directives),
            description: ast_field.description.clone(),
            name: ast_field.name.clone(),
            parameters: ast_field.arguments.iter()
                .map(|input_val| Ok((
                    input_val.name.clone(),
                    Parameter::from_ast(file_path, input_val)?,
                )))
                .collect::<Result<_, InternalInvariantError>>()?,
            type_annotation: TypeAnnotation::from_ast_type(&ast_field.field_type),
        })
    }
}
