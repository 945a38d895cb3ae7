use crate::loc;

/// A custom scalar. The five built-in scalars are represented directly as
/// [`GraphQLType`](crate::types::GraphQLType) variants instead.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
