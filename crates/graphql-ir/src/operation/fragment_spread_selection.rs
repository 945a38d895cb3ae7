use crate::loc;
use crate::operation::FragmentId;
use crate::types::PossibleTypes;
use crate::DirectiveAnnotation;

/// `...FragmentName`.
///
/// The spread refers to the fragment by its id in the document's
/// [`FragmentTable`](crate::operation::FragmentTable) rather than holding a
/// copy of it.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpreadSelection {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fragment: FragmentId,
    pub(crate) fragment_name: String,
    pub(crate) possible_types: PossibleTypes,
}
impl FragmentSpreadSelection {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn fragment_id(&self) -> FragmentId {
        self.fragment
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }

    /// The fragment's possible types intersected with those of the scope it
    /// was spread into.
    pub fn possible_types(&self) -> &PossibleTypes {
        &self.possible_types
    }
}
