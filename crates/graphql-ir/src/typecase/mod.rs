//! Splits a polymorphic selection set into the disjoint groups of concrete
//! types that each need their own generated shape.

mod type_case;
mod type_case_options;
mod type_case_partitioner;
mod variant;

pub use type_case::TypeCase;
pub use type_case_options::TypeCaseOptions;
pub use type_case_partitioner::TypeCasePartitioner;
pub use variant::Variant;

#[cfg(test)]
mod tests;
