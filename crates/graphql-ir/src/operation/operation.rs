use crate::identity;
use crate::identity::OperationIdentity;
use crate::loc;
use crate::operation::FragmentId;
use crate::operation::FragmentTable;
use crate::operation::OperationKind;
use crate::operation::SelectionSet;
use crate::operation::Variable;
use crate::DirectiveAnnotation;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;

/// A compiled, named query, mutation, or subscription.
#[derive(Clone, Debug)]
pub struct Operation {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) file_path: Option<PathBuf>,
    pub(crate) fragment_spreads: Vec<FragmentId>,
    pub(crate) identity: OnceLock<OperationIdentity>,
    pub(crate) kind: OperationKind,
    pub(crate) name: String,
    pub(crate) root_type: String,
    pub(crate) selection_set: SelectionSet,
    pub(crate) source: String,
    pub(crate) variables: IndexMap<String, Variable>,
}
impl Operation {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Fragments spread directly by this operation's selection set, in
    /// first-reference order.
    pub fn fragment_spreads(&self) -> &[FragmentId] {
        self.fragment_spreads.as_slice()
    }

    /// The persisted-query identity of this operation, computed on first
    /// access.
    ///
    /// `fragments` must be the table this operation was compiled alongside.
    pub fn identity(&self, fragments: &FragmentTable) -> &OperationIdentity {
        self.identity.get_or_init(|| identity::identify(self, fragments))
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn root_type_name(&self) -> &str {
        self.root_type.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// The canonical printed form of this operation's definition.
    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    /// Declared variables, in declaration order.
    pub fn variables(&self) -> &IndexMap<String, Variable> {
        &self.variables
    }
}
// The cached identity is derived data and does not participate in equality.
impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.def_location == other.def_location
            && self.directives == other.directives
            && self.file_path == other.file_path
            && self.fragment_spreads == other.fragment_spreads
            && self.kind == other.kind
            && self.name == other.name
            && self.root_type == other.root_type
            && self.selection_set == other.selection_set
            && self.source == other.source
            && self.variables == other.variables
    }
}
