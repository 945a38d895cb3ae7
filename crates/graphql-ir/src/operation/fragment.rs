use crate::loc;
use crate::operation::FragmentId;
use crate::operation::SelectionSet;
use crate::DirectiveAnnotation;
use std::path::Path;
use std::path::PathBuf;

/// A compiled named fragment definition.
///
/// Each fragment is compiled once per compile call and shared by id from
/// every site that spreads it.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) file_path: Option<PathBuf>,
    pub(crate) fragment_spreads: Vec<FragmentId>,
    pub(crate) name: String,
    pub(crate) selection_set: SelectionSet,
    pub(crate) source: String,
    pub(crate) type_condition: String,
}
impl Fragment {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Fragments spread directly by this fragment's selection set, in
    /// first-reference order.
    pub fn fragment_spreads(&self) -> &[FragmentId] {
        self.fragment_spreads.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// The canonical printed form of this fragment's definition.
    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
