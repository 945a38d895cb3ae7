use crate::loc;
use crate::operation::BooleanCondition;
use crate::operation::SelectionSet;
use crate::types::TypeAnnotation;
use crate::Argument;
use crate::DirectiveAnnotation;

/// A field selected in an executable document, resolved against its
/// definition in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: Vec<Argument>,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) parent_type: String,
    pub(crate) selection_set: Option<SelectionSet>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl FieldSelection {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }

    pub fn boolean_conditions(&self) -> Vec<BooleanCondition> {
        self.directives.iter()
            .filter_map(BooleanCondition::from_directive)
            .filter(|condition| !condition.is_always_satisfied())
            .collect()
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    /// Whether this field selects a composite type (and so carries a nested
    /// selection set).
    pub fn is_composite(&self) -> bool {
        self.selection_set.is_some()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type.as_str()
    }

    /// The key this field's value is stored under in a response: its alias
    /// if it has one, otherwise its name.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }

    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
