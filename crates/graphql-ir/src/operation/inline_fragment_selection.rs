use crate::loc;
use crate::operation::SelectionSet;
use crate::DirectiveAnnotation;

/// `... on Type { ... }`, or a type-condition-less `... @include(if: $x) { ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragmentSelection {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) selection_set: SelectionSet,
    pub(crate) type_condition: Option<String>,
}
impl InlineFragmentSelection {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    /// The nested selections. Their possible types are the enclosing scope's
    /// possible types narrowed by the type condition.
    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}
