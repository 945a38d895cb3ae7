use crate::loc;
use crate::types::InputField;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, InputField>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
