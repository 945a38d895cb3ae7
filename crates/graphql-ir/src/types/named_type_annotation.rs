#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_name: String,
}
impl NamedTypeAnnotation {
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn to_graphql_string(&self) -> String {
        let nullable_str = if self.nullable { "" } else { "!" };
        format!("{}{nullable_str}", self.type_name)
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
