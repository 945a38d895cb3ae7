use crate::operation::FragmentId;
use crate::operation::Selection;
use crate::types::PossibleTypes;

/// Anything that presents an ordered list of selections against a composite
/// parent type: a compiled [`SelectionSet`] or a type-case
/// [`Variant`](crate::typecase::Variant).
pub trait SelectionScope {
    fn parent_type_name(&self) -> &str;
    fn possible_types(&self) -> &PossibleTypes;
    fn selections(&self) -> &[Selection];
}

/// An ordered list of selections made against a composite type.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub(crate) parent_type: String,
    pub(crate) possible_types: PossibleTypes,
    pub(crate) selections: Vec<Selection>,
}
impl SelectionSet {
    /// Every fragment spread reachable from this selection set without
    /// passing through another fragment, in first-reference order.
    pub fn direct_fragment_spreads(&self) -> Vec<FragmentId> {
        let mut fragment_ids = vec![];
        collect_fragment_spreads(self, &mut fragment_ids);
        fragment_ids
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type.as_str()
    }

    /// The concrete object types this selection set could apply to.
    pub fn possible_types(&self) -> &PossibleTypes {
        &self.possible_types
    }

    pub fn selections(&self) -> &[Selection] {
        self.selections.as_slice()
    }
}
impl SelectionScope for SelectionSet {
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

fn collect_fragment_spreads(selection_set: &SelectionSet, fragment_ids: &mut Vec<FragmentId>) {
    for selection in &selection_set.selections {
        match selection {
            Selection::Field(field) => {
                if let Some(nested) = field.selection_set() {
                    collect_fragment_spreads(nested, fragment_ids);
                }
            },

            Selection::FragmentSpread(spread) => {
                if !fragment_ids.contains(&spread.fragment_id()) {
                    fragment_ids.push(spread.fragment_id());
                }
            },

            Selection::InlineFragment(inline) =>
                collect_fragment_spreads(inline.selection_set(), fragment_ids),
        }
    }
}
