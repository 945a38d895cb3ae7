use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::InternalInvariantError;
use indexmap::IndexSet;

/// The named schema types touched while compiling a document, in the order
/// they were first reached.
///
/// Code generators use this to decide which schema types need emitted
/// declarations. Adding a union also adds each of its member types; adding
/// an input object also adds the named type of each of its fields, since
/// input field types are otherwise unreachable from a selection-set walk.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReferencedTypeSet {
    types: IndexSet<String>,
}
impl ReferencedTypeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `type_name` (and whatever it transitively pulls in). Adding a
    /// type that is already present is a no-op.
    pub fn add(
        &mut self,
        schema: &Schema,
        type_name: &str,
    ) -> Result<(), InternalInvariantError> {
        if self.types.contains(type_name) {
            return Ok(());
        }

        let type_ = schema.lookup_type(type_name)
            .ok_or_else(|| InternalInvariantError::TypeMissingFromSchema {
                type_name: type_name.to_string(),
            })?;

        // Insert before recursing so self-referential input objects terminate.
        self.types.insert(type_name.to_string());

        match type_ {
            GraphQLType::InputObject(inputobj_t) => {
                for field in inputobj_t.fields().values() {
                    self.add(schema, field.type_annotation().innermost_type_name())?;
                }
            },

            GraphQLType::Union(union_t) => {
                for member_name in union_t.member_type_names() {
                    self.add(schema, member_name)?;
                }
            },

            _ => (),
        }

        Ok(())
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains(type_name)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|name| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }
}
