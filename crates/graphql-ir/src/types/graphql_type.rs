use crate::loc;
use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

static BUILTIN_LOCATION: loc::SourceLocation = loc::SourceLocation::GraphQLBuiltIn;

/// A named type defined within a [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(Box<EnumType>),
    Float,
    ID,
    InputObject(Box<InputObjectType>),
    Int,
    Interface(Box<InterfaceType>),
    Object(Box<ObjectType>),
    Scalar(Box<ScalarType>),
    String,
    Union(Box<UnionType>),
}
impl GraphQLType {
    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(iface_t) = self {
            Some(iface_t)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(obj_t) = self {
            Some(obj_t)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(union_t) = self {
            Some(union_t)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Bool
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::String => &BUILTIN_LOCATION,
            Self::Enum(t) => t.def_location(),
            Self::InputObject(t) => t.def_location(),
            Self::Interface(t) => t.def_location(),
            Self::Object(t) => t.def_location(),
            Self::Scalar(t) => t.def_location(),
            Self::Union(t) => t.def_location(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Bool
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::String => None,
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Scalar(t) => t.description(),
            Self::Union(t) => t.description(),
        }
    }

    /// Object, interface, and union types are composite: selecting one
    /// requires a nested selection set.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union(_))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum(t) => t.name(),
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject(t) => t.name(),
            Self::Int => "Int",
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::String => "String",
            Self::Union(t) => t.name(),
        }
    }

    pub fn type_kind(&self) -> GraphQLTypeKind {
        self.into()
    }
}
