mod boolean_condition;
mod compiled_document;
mod document_compiler;
mod field_selection;
mod fragment;
mod fragment_spread_selection;
mod fragment_table;
mod inline_fragment_selection;
#[allow(clippy::module_inception)]
mod operation;
mod operation_kind;
mod selection;
mod selection_set;
mod variable;

pub use boolean_condition::BooleanCondition;
pub use boolean_condition::BooleanConditionKind;
pub use boolean_condition::ConditionValue;
pub(crate) use boolean_condition::wrap_in_boolean_conditions;
pub use compiled_document::CompiledDocument;
pub use document_compiler::compile;
pub use document_compiler::DocumentCompiler;
pub use document_compiler::SourceDocument;
pub use field_selection::FieldSelection;
pub use fragment::Fragment;
pub use fragment_spread_selection::FragmentSpreadSelection;
pub use fragment_table::FragmentId;
pub use fragment_table::FragmentTable;
pub use inline_fragment_selection::InlineFragmentSelection;
pub use operation::Operation;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionScope;
pub use selection_set::SelectionSet;
pub use variable::Variable;

#[cfg(test)]
mod tests;
