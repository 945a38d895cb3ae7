use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::DeprecationState;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::NamedTypeAnnotation;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::InternalInvariantError;
use indexmap::IndexMap;
use std::sync::OnceLock;

fn meta_field(
    name: &str,
    type_name: &str,
    nullable: bool,
    parameters: IndexMap<String, Parameter>,
) -> Field {
    Field {
        def_location: loc::SourceLocation::GraphQLBuiltIn,
        deprecation_state: DeprecationState::NotDeprecated,
        description: None,
        name: name.to_string(),
        parameters,
        type_annotation: TypeAnnotation::Named(NamedTypeAnnotation {
            nullable,
            type_name: type_name.to_string(),
        }),
    }
}

fn typename_meta_field() -> &'static Field {
    static FIELD: OnceLock<Field> = OnceLock::new();
    FIELD.get_or_init(|| meta_field("__typename", "String", false, IndexMap::new()))
}

fn schema_meta_field() -> &'static Field {
    static FIELD: OnceLock<Field> = OnceLock::new();
    FIELD.get_or_init(|| meta_field("__schema", "__Schema", false, IndexMap::new()))
}

fn type_meta_field() -> &'static Field {
    static FIELD: OnceLock<Field> = OnceLock::new();
    FIELD.get_or_init(|| {
        let name_param = Parameter::builtin(
            "name",
            TypeAnnotation::from_ast_type(&ast::Type::NonNullType(Box::new(
                ast::Type::NamedType("String".to_string()),
            ))),
        );
        meta_field(
            "__type",
            "__Type",
            true,
            IndexMap::from([("name".to_string(), name_param)]),
        )
    })
}

impl Schema {
    /// Resolve the definition of `field_name` as selected on `parent_type`.
    ///
    /// Handles the introspection meta-fields: `__typename` resolves on every
    /// composite type, while `__schema` and `__type` only resolve on the
    /// query root type. Returns `Ok(None)` when the parent type declares no
    /// such field.
    ///
    /// Unions declare no fields of their own, so looking up anything other
    /// than `__typename` on a union (or looking up any field on a
    /// non-composite type) is an [`InternalInvariantError`]: validation
    /// should have rejected the document before it got here.
    pub fn field_definition<'a>(
        &'a self,
        parent_type: &'a GraphQLType,
        field_name: &str,
    ) -> Result<Option<&'a Field>, InternalInvariantError> {
        if !parent_type.is_composite() {
            return Err(InternalInvariantError::NonCompositeParentType {
                type_name: parent_type.name().to_string(),
            });
        }

        let is_query_root = parent_type.name() == self.query_type_name();
        match field_name {
            "__typename" => return Ok(Some(typename_meta_field())),
            "__schema" if is_query_root => return Ok(Some(schema_meta_field())),
            "__type" if is_query_root => return Ok(Some(type_meta_field())),
            _ => (),
        }

        match parent_type {
            GraphQLType::Interface(iface_t) => Ok(iface_t.field(field_name)),
            GraphQLType::Object(obj_t) => Ok(obj_t.field(field_name)),
            GraphQLType::Union(union_t) => Err(InternalInvariantError::FieldOnUnionType {
                field_name: field_name.to_string(),
                union_name: union_t.name().to_string(),
            }),
            _ => Err(InternalInvariantError::NonCompositeParentType {
                type_name: parent_type.name().to_string(),
            }),
        }
    }
}
