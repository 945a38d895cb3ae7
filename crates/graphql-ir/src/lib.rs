//! Compiles schema-checked GraphQL executable documents into an intermediate
//! representation suitable for generating strongly-typed client bindings.
//!
//! The pipeline is:
//!
//! 1. Build a [`Schema`](schema::Schema) from SDL with
//!    [`SchemaBuilder`](schema::SchemaBuilder).
//! 2. Compile one or more executable documents with
//!    [`DocumentCompiler`](operation::DocumentCompiler) into a
//!    [`CompiledDocument`](operation::CompiledDocument).
//! 3. For each selection set, compute merged fields with
//!    [`FieldMerger`](merge::FieldMerger) and polymorphic variants with
//!    [`TypeCasePartitioner`](typecase::TypeCasePartitioner).
//! 4. Identify operations for persisted queries with
//!    [`identify()`](identity::identify) and collect them into a
//!    [`PersistedQueryManifest`](identity::PersistedQueryManifest).

pub mod ast;
mod compile_error;
mod directive_annotation;
mod file_reader;
pub mod identity;
pub mod loc;
pub mod merge;
pub mod operation;
mod referenced_type_set;
pub mod schema;
pub mod typecase;
pub mod types;
mod value;

pub use compile_error::CompileError;
pub use compile_error::InternalInvariantError;
pub use compile_error::SchemaReferenceError;
pub use compile_error::StructuralError;
pub use directive_annotation::Argument;
pub use directive_annotation::DirectiveAnnotation;
pub use file_reader::ReadContentError;
pub use referenced_type_set::ReferencedTypeSet;
pub use value::Value;

#[cfg(test)]
mod tests;
