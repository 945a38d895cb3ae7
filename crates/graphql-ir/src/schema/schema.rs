use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::ObjectTypeId;
use crate::types::PossibleTypes;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::HashMap;

/// Represents a fully built and immutable GraphQL schema.
///
/// A `Schema` is only ever read by the compiler, so a single instance can be
/// shared by any number of concurrent compilations.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, Directive>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) object_type_names: IndexSet<String>,
    pub(crate) possible_types: HashMap<String, PossibleTypes>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns every directive defined within this [`Schema`], including the
    /// implicitly-defined built-in directives like `@include`.
    pub fn all_directives(&self) -> &IndexMap<String, Directive> {
        &self.directive_defs
    }

    /// Returns every type defined within this [`Schema`], including built-in
    /// scalars and introspection types, in definition order.
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directive_defs.get(name)
    }

    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    /// The number of object types in this schema. Every [`PossibleTypes`] set
    /// built against this schema has this capacity.
    pub fn num_object_types(&self) -> usize {
        self.object_type_names.len()
    }

    pub fn object_type(&self, id: ObjectTypeId) -> Option<&ObjectType> {
        self.object_type_name(id)
            .and_then(|name| self.types.get(name))
            .and_then(GraphQLType::as_object)
    }

    pub fn object_type_id(&self, name: &str) -> Option<ObjectTypeId> {
        self.object_type_names.get_index_of(name).map(ObjectTypeId::from)
    }

    pub fn object_type_name(&self, id: ObjectTypeId) -> Option<&str> {
        self.object_type_names.get_index(id.index()).map(|name| name.as_str())
    }

    /// The concrete object types that the named composite type could resolve
    /// to at runtime:
    ///
    /// * An object type's only possible type is itself.
    /// * An interface's possible types are every object type implementing it.
    /// * A union's possible types are its members.
    ///
    /// Returns `None` for unknown and non-composite types.
    pub fn possible_types(&self, type_name: &str) -> Option<&PossibleTypes> {
        self.possible_types.get(type_name)
    }

    /// Names of each type in `possible_types`, in schema definition order.
    pub fn possible_type_names<'a>(
        &'a self,
        possible_types: &'a PossibleTypes,
    ) -> impl Iterator<Item = &'a str> + 'a {
        possible_types.iter().filter_map(|id| self.object_type_name(id))
    }

    pub fn query_type_name(&self) -> &str {
        self.query_type.as_str()
    }

    /// The name of the root type for the given kind of operation, if the
    /// schema defines one.
    pub fn root_type_name(&self, operation_kind: OperationKind) -> Option<&str> {
        match operation_kind {
            OperationKind::Mutation => self.mutation_type_name(),
            OperationKind::Query => Some(self.query_type_name()),
            OperationKind::Subscription => self.subscription_type_name(),
        }
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }
}
