use crate::types::TypeAnnotation;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ListTypeAnnotation {
    pub(crate) inner_type: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn inner_type(&self) -> &TypeAnnotation {
        &self.inner_type
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn to_graphql_string(&self) -> String {
        let nullable_str = if self.nullable { "" } else { "!" };
        format!("[{}]{nullable_str}", self.inner_type.to_graphql_string())
    }
}
