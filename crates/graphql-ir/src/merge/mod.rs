//! Deduplicates the fields of a selection set by response key.

mod field_merger;
mod merged_field;

pub use field_merger::FieldMerger;
pub use merged_field::MergedField;
