use crate::operation::FragmentId;
use crate::operation::Selection;
use crate::operation::SelectionScope;
use crate::types::PossibleTypes;

/// A group of concrete types that share one set of selections.
#[derive(Clone, Debug, PartialEq)]
pub struct Variant {
    pub(crate) fragment_spreads: Vec<FragmentId>,
    pub(crate) parent_type: String,
    pub(crate) possible_types: PossibleTypes,
    pub(crate) selections: Vec<Selection>,
}
impl Variant {
    pub(crate) fn new(parent_type: &str, possible_types: PossibleTypes) -> Self {
        Self {
            fragment_spreads: vec![],
            parent_type: parent_type.to_string(),
            possible_types,
            selections: vec![],
        }
    }

    /// Fragments spread at this level that every type of this variant
    /// conforms to.
    pub fn fragment_spreads(&self) -> &[FragmentId] {
        self.fragment_spreads.as_slice()
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type.as_str()
    }

    pub fn possible_types(&self) -> &PossibleTypes {
        &self.possible_types
    }

    pub fn selections(&self) -> &[Selection] {
        self.selections.as_slice()
    }

    pub(crate) fn add_fragment_spread(&mut self, fragment_id: FragmentId) {
        if !self.fragment_spreads.contains(&fragment_id) {
            self.fragment_spreads.push(fragment_id);
        }
    }

    /// A copy of this variant's selections and conformances, restricted to
    /// `possible_types`.
    pub(crate) fn split_off(&self, possible_types: PossibleTypes) -> Self {
        Self {
            fragment_spreads: self.fragment_spreads.clone(),
            parent_type: self.parent_type.clone(),
            possible_types,
            selections: self.selections.clone(),
        }
    }
}
impl SelectionScope for Variant {
    fn parent_type_name(&self) -> &str {
        self.parent_type.as_str()
    }

    fn possible_types(&self) -> &PossibleTypes {
        &self.possible_types
    }

    fn selections(&self) -> &[Selection] {
        self.selections.as_slice()
    }
}
