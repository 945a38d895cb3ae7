use crate::ast;

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DeprecationState {
    Deprecated(String),
    NotDeprecated,
}
impl DeprecationState {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Deprecated(reason) => Some(reason.as_str()),
            Self::NotDeprecated => None,
        }
    }

    pub(crate) fn from_ast_directives(directives: &[ast::schema::Directive]) -> Self {
        let Some(deprecated) = directives.iter().find(|d| d.name == "deprecated") else {
            return Self::NotDeprecated;
        };

        let reason = deprecated.arguments.iter()
            .find_map(|(arg_name, arg_value)| match arg_value {
                ast::Value::String(reason) if arg_name == "reason" => Some(reason.clone()),
                _ => None,
            })
            .unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string());

        Self::Deprecated(reason)
    }
}
