use crate::loc;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);
impl InterfaceType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.0.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.0.fields.get(name)
    }

    /// The fields declared on this type (including those added by type
    /// extensions), in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.0.fields
    }

    /// Names of the interfaces this type declares that it implements.
    pub fn interface_names(&self) -> &[String] {
        self.0.interfaces.as_slice()
    }

    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }
}
