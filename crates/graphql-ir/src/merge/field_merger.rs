use crate::merge::MergedField;
use crate::operation::wrap_in_boolean_conditions;
use crate::operation::BooleanCondition;
use crate::operation::FieldSelection;
use crate::operation::FragmentTable;
use crate::operation::Selection;
use crate::operation::SelectionScope;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::typecase::TypeCaseOptions;
use crate::types::PossibleTypes;
use crate::InternalInvariantError;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, InternalInvariantError>;

struct FieldRecord {
    conditions: Vec<BooleanCondition>,
    field: FieldSelection,
}

/// Collects the fields that apply to every possible type of a selection
/// scope and merges those that share a response key.
///
/// Fragment spreads and inline fragments are only looked through when they
/// apply to every possible type of the scope. Narrower ones are left for
/// the [`TypeCasePartitioner`](crate::typecase::TypeCasePartitioner) to
/// place on the variants they apply to.
#[derive(Clone, Copy, Debug)]
pub struct FieldMerger<'a> {
    fragments: &'a FragmentTable,
    options: TypeCaseOptions,
    schema: &'a Schema,
}
impl<'a> FieldMerger<'a> {
    pub fn new(schema: &'a Schema, fragments: &'a FragmentTable) -> Self {
        Self {
            fragments,
            options: TypeCaseOptions::default(),
            schema,
        }
    }

    pub fn with_options(mut self, options: TypeCaseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn merge_fields(&self, scope: &impl SelectionScope) -> Result<Vec<MergedField>> {
        let mut groups: IndexMap<String, Vec<FieldRecord>> = IndexMap::new();
        self.collect_fields(scope.selections(), scope.possible_types(), &[], &mut groups)?;

        let mut merged_fields = Vec::with_capacity(groups.len());
        for (response_key, records) in groups {
            if let Some(merged_field) = merge_records(response_key.as_str(), records)? {
                merged_fields.push(merged_field);
            }
        }

        if scope.possible_types().len() == 1 {
            self.refresh_descriptions(scope.possible_types(), &mut merged_fields);
        }

        Ok(merged_fields)
    }

    fn collect_fields(
        &self,
        selections: &[Selection],
        possible_types: &PossibleTypes,
        conditions: &[BooleanCondition],
        groups: &mut IndexMap<String, Vec<FieldRecord>>,
    ) -> Result<()> {
        if possible_types.is_empty() {
            return Ok(());
        }

        for selection in selections {
            let mut selection_conditions = conditions.to_vec();
            selection_conditions.extend(selection.boolean_conditions());

            match selection {
                Selection::Field(field) => {
                    groups.entry(field.response_key().to_string())
                        .or_default()
                        .push(FieldRecord {
                            conditions: selection_conditions,
                            field: field.clone(),
                        });
                },

                Selection::FragmentSpread(spread) => {
                    if !self.options.merge_in_fragment_spreads
                        || !possible_types.is_subset(spread.possible_types()) {
                        continue;
                    }
                    let fragment = self.fragments.resolve(spread.fragment_id())?;
                    self.collect_fields(
                        fragment.selection_set().selections(),
                        possible_types,
                        &selection_conditions,
                        groups,
                    )?;
                },

                Selection::InlineFragment(inline) => {
                    if !possible_types.is_subset(inline.selection_set().possible_types()) {
                        continue;
                    }
                    self.collect_fields(
                        inline.selection_set().selections(),
                        possible_types,
                        &selection_conditions,
                        groups,
                    )?;
                },
            }
        }

        Ok(())
    }

    /// When only one concrete type remains, its own field descriptions are
    /// more specific than an interface's.
    fn refresh_descriptions(
        &self,
        possible_types: &PossibleTypes,
        merged_fields: &mut [MergedField],
    ) {
        let Some(obj_t) = possible_types.first().and_then(|id| self.schema.object_type(id)) else {
            return;
        };

        for merged_field in merged_fields {
            let description = obj_t.field(merged_field.field.name())
                .and_then(|field_def| field_def.description());
            if let Some(description) = description {
                merged_field.field.description = Some(description.to_string());
            }
        }
    }
}

fn merge_records(
    response_key: &str,
    records: Vec<FieldRecord>,
) -> Result<Option<MergedField>> {
    let included_unconditionally = records.iter().any(|record| record.conditions.is_empty());

    let records: Vec<FieldRecord> = records.into_iter().map(|mut record| {
        // The accessor is always generated, so nested presence has to carry
        // the conditions instead.
        if included_unconditionally && !record.conditions.is_empty() {
            if let Some(selection_set) = record.field.selection_set.take() {
                let SelectionSet { parent_type, possible_types, selections } = selection_set;
                record.field.selection_set = Some(SelectionSet {
                    selections: wrap_in_boolean_conditions(
                        selections,
                        &record.conditions,
                        parent_type.as_str(),
                        &possible_types,
                    ),
                    parent_type,
                    possible_types,
                });
            }
        }
        record
    }).collect();

    // An unconditional occurrence, when there is one, supplies the merged
    // field's own directives and location.
    let Some(representative) = records.iter()
        .find(|record| record.conditions.is_empty())
        .or_else(|| records.first()) else {
        return Ok(None);
    };
    let mut field = representative.field.clone();
    if let Some(selection_set) = field.selection_set.as_mut() {
        selection_set.selections.clear();
    }
    let mut merged_field = MergedField {
        conditions: vec![],
        field,
        is_conditional: true,
    };

    for record in records {
        if record.field.type_annotation != merged_field.field.type_annotation {
            return Err(InternalInvariantError::FieldMergeConflict {
                first_type: merged_field.field.type_annotation.to_graphql_string(),
                response_key: response_key.to_string(),
                second_type: record.field.type_annotation.to_graphql_string(),
            });
        }

        merged_field.is_conditional &= !record.conditions.is_empty();
        merged_field.conditions.extend(record.conditions);
        if let (Some(merged_set), Some(record_set)) = (
            merged_field.field.selection_set.as_mut(),
            record.field.selection_set,
        ) {
            merged_set.selections.extend(record_set.selections);
        }
    }

    Ok(Some(merged_field))
}
