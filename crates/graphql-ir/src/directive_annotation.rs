use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::TypeAnnotation;
use crate::CompileError;
use crate::SchemaReferenceError;
use crate::Value;
use std::path::Path;

/// A name/value pair passed to a field or directive in an executable
/// document, along with the type its definition declares for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub(crate) name: String,
    pub(crate) type_annotation: Option<TypeAnnotation>,
    pub(crate) value: Value,
}
impl Argument {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The declared type of the matching parameter, if the definition
    /// declares one with this name.
    pub fn type_annotation(&self) -> Option<&TypeAnnotation> {
        self.type_annotation.as_ref()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// A directive applied within an executable document, e.g.
/// `@include(if: $withFriends)`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: Vec<Argument>,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) name: String,
}
impl DirectiveAnnotation {
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }

    /// The arguments of this annotation in source order.
    pub fn arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(
        schema: &Schema,
        file_path: Option<&Path>,
        ast_directive: &ast::operation::Directive,
    ) -> Result<Self, CompileError> {
        let def_location = loc::SourceLocation::from_pos(file_path, ast_directive.position);
        let directive_def = schema.directive(ast_directive.name.as_str())
            .ok_or_else(|| SchemaReferenceError::UndefinedDirective {
                directive_name: ast_directive.name.clone(),
                location: def_location.clone(),
            })?;

        let mut arguments = Vec::with_capacity(ast_directive.arguments.len());
        for (arg_name, ast_value) in &ast_directive.arguments {
            let param = directive_def.parameter(arg_name.as_str())
                .ok_or_else(|| SchemaReferenceError::UndefinedDirectiveArgument {
                    argument_name: arg_name.clone(),
                    directive_name: ast_directive.name.clone(),
                    location: def_location.clone(),
                })?;
            arguments.push(Argument {
                name: arg_name.clone(),
                type_annotation: Some(param.type_annotation().clone()),
                value: Value::from_ast(ast_value)?,
            });
        }

        Ok(Self {
            arguments,
            def_location,
            name: ast_directive.name.clone(),
        })
    }

    pub(crate) fn from_ast_list(
        schema: &Schema,
        file_path: Option<&Path>,
        ast_directives: &[ast::operation::Directive],
    ) -> Result<Vec<Self>, CompileError> {
        ast_directives.iter()
            .map(|ast_directive| Self::from_ast(schema, file_path, ast_directive))
            .collect()
    }
}
