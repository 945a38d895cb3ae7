use crate::operation::BooleanCondition;
use crate::operation::FieldSelection;

/// All selections of one response key, merged into a single field.
#[derive(Clone, Debug, PartialEq)]
pub struct MergedField {
    pub(crate) conditions: Vec<BooleanCondition>,
    pub(crate) field: FieldSelection,
    pub(crate) is_conditional: bool,
}
impl MergedField {
    /// Every `@include`/`@skip` condition seen on any path that reached
    /// this field, in the order the paths were visited.
    pub fn conditions(&self) -> &[BooleanCondition] {
        self.conditions.as_slice()
    }

    pub fn field(&self) -> &FieldSelection {
        &self.field
    }

    pub fn into_field(self) -> FieldSelection {
        self.field
    }

    /// False when at least one path reaches this field without passing
    /// through an `@include`/`@skip` condition.
    pub fn is_conditional(&self) -> bool {
        self.is_conditional
    }

    pub fn response_key(&self) -> &str {
        self.field.response_key()
    }
}
