use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;
use crate::InternalInvariantError;
use crate::Value;
use std::path::Path;

/// An argument declared on a [`Field`](crate::types::Field) or a
/// [`Directive`](crate::types::Directive).
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<Value>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        input_val: &ast::schema::InputValue,
    ) -> Result<Self, InternalInvariantError> {
        Ok(Self {
            def_location: loc::SourceLocation::from_pos(file_path, input_val.position),
            default_value: input_val.default_value.as_ref()
                .map(Value::from_ast)
                .transpose()?,
            description: input_val.description.clone(),
            name: input_val.name.clone(),
            type_annotation: TypeAnnotation::from_ast_type(&input_val.value_type),
        })
    }

    pub(crate) fn builtin(name: &str, type_annotation: TypeAnnotation) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            default_value: None,
            description: None,
            name: name.to_string(),
            type_annotation,
        }
    }
}
