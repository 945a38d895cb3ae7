use crate::loc;
use crate::types::DeprecationState;
use indexmap::IndexMap;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) deprecation_state: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl EnumValue {
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
}
