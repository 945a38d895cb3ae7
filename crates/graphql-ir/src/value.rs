use crate::ast;
use crate::InternalInvariantError;
use indexmap::IndexMap;

/// A structural, schema-independent rendering of a GraphQL input value as
/// written in an executable document (or as a schema default value).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Value {
    Bool(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    /// Entries are ordered by key: the parser hands object literals over
    /// keyed by name, so their source order is not recoverable.
    Object(IndexMap<String, Value>),
    String(String),
    Variable(String),
}
impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn as_variable_name(&self) -> Option<&str> {
        if let Self::Variable(name) = self {
            Some(name.as_str())
        } else {
            None
        }
    }

    /// Resolve an AST value node into a [`Value`].
    ///
    /// List items keep their source order. Object entries come out sorted
    /// by key rather than in source order, since the parser stores them in
    /// a `BTreeMap`.
    pub fn from_ast(ast_value: &ast::Value) -> Result<Self, InternalInvariantError> {
        Ok(match ast_value {
            ast::Value::Variable(var_name) =>
                Value::Variable(var_name.clone()),

            ast::Value::Int(number) =>
                Value::Int(number.as_i64().ok_or_else(|| {
                    InternalInvariantError::IntValueOutOfRange {
                        literal: format!("{number:?}"),
                    }
                })?),

            ast::Value::Float(value) =>
                Value::Float(*value),

            ast::Value::String(value) =>
                Value::String(value.clone()),

            ast::Value::Boolean(value) =>
                Value::Bool(*value),

            ast::Value::Null =>
                Value::Null,

            ast::Value::Enum(value) =>
                Value::Enum(value.clone()),

            ast::Value::List(values) =>
                Value::List(
                    values.iter()
                        .map(Value::from_ast)
                        .collect::<Result<_, _>>()?,
                ),

            ast::Value::Object(entries) =>
                Value::Object(
                    entries.iter()
                        .map(|(key, ast_value)| {
                            Ok((key.clone(), Value::from_ast(ast_value)?))
                        })
                        .collect::<Result<_, InternalInvariantError>>()?,
                ),
        })
    }
}
