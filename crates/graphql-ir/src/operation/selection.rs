use crate::loc;
use crate::operation::BooleanCondition;
use crate::operation::FieldSelection;
use crate::operation::FragmentSpreadSelection;
use crate::operation::InlineFragmentSelection;
use crate::DirectiveAnnotation;

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(FieldSelection),
    FragmentSpread(FragmentSpreadSelection),
    InlineFragment(InlineFragmentSelection),
}
impl Selection {
    /// The `@include`/`@skip` conditions applied directly to this selection,
    /// excluding conditions that can never exclude anything.
    pub fn boolean_conditions(&self) -> Vec<BooleanCondition> {
        self.directives().iter()
            .filter_map(BooleanCondition::from_directive)
            .filter(|condition| !condition.is_always_satisfied())
            .collect()
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Field(field) => field.def_location(),
            Self::FragmentSpread(spread) => spread.def_location(),
            Self::InlineFragment(inline) => inline.def_location(),
        }
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        match self {
            Self::Field(field) => field.directives(),
            Self::FragmentSpread(spread) => spread.directives(),
            Self::InlineFragment(inline) => inline.directives(),
        }
    }
}
