use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;

/// Storage shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) name: String,
}
