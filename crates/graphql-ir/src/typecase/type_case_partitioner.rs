use crate::operation::FragmentTable;
use crate::operation::Selection;
use crate::operation::SelectionScope;
use crate::typecase::TypeCase;
use crate::typecase::TypeCaseOptions;
use crate::types::PossibleTypes;
use crate::InternalInvariantError;

type Result<T> = std::result::Result<T, InternalInvariantError>;

/// Computes the [`TypeCase`] of a selection scope: the smallest set of
/// disjoint variants for which each concrete type sees exactly the
/// selections that apply to it.
///
/// Plain fields apply to every possible type. Inline fragments and fragment
/// spreads are partitioned recursively over the types they narrow to and
/// the result is merged back in. A fragment spread is also recorded as a
/// conformance on each variant its types cover. `@include`/`@skip` do not
/// affect the partition itself; selections reached through them are
/// re-wrapped in the same conditions when merged upward.
#[derive(Clone, Copy, Debug)]
pub struct TypeCasePartitioner<'a> {
    fragments: &'a FragmentTable,
    options: TypeCaseOptions,
}
impl<'a> TypeCasePartitioner<'a> {
    pub fn new(fragments: &'a FragmentTable) -> Self {
        Self {
            fragments,
            options: TypeCaseOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TypeCaseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn partition(&self, scope: &impl SelectionScope) -> Result<TypeCase> {
        self.partition_selections(
            scope.parent_type_name(),
            scope.possible_types(),
            scope.selections(),
        )
    }

    fn partition_selections(
        &self,
        parent_type: &str,
        possible_types: &PossibleTypes,
        selections: &[Selection],
    ) -> Result<TypeCase> {
        let mut type_case = TypeCase::new(parent_type, possible_types.clone());

        for selection in selections {
            match selection {
                Selection::Field(_) => {
                    for slot in type_case.disjoint_variants_for(possible_types) {
                        type_case.variant_mut(slot).selections.push(selection.clone());
                    }
                },

                Selection::FragmentSpread(spread) => {
                    let fragment_id = spread.fragment_id();
                    let spread_types = possible_types.intersection(spread.possible_types());
                    if type_case.conforms_to(&spread_types, fragment_id) {
                        log::trace!(
                            "Skipping repeated spread of `{}`",
                            spread.fragment_name(),
                        );
                        continue;
                    }

                    for slot in type_case.disjoint_variants_for(&spread_types) {
                        let variant = type_case.variant_mut(slot);
                        variant.add_fragment_spread(fragment_id);
                        if !self.options.merge_in_fragment_spreads {
                            variant.selections.push(selection.clone());
                        }
                    }

                    if self.options.merge_in_fragment_spreads {
                        let fragment = self.fragments.resolve(fragment_id)?;
                        let nested = self.partition_selections(
                            fragment.type_condition(),
                            &spread_types,
                            fragment.selection_set().selections(),
                        )?;
                        type_case.merge(nested, &selection.boolean_conditions());
                    }
                },

                Selection::InlineFragment(inline) => {
                    let nested = self.partition_selections(
                        inline.selection_set().parent_type_name(),
                        &possible_types.intersection(inline.selection_set().possible_types()),
                        inline.selection_set().selections(),
                    )?;
                    type_case.merge(nested, &selection.boolean_conditions());
                },
            }
        }

        Ok(type_case)
    }
}
