use crate::ast;
use crate::loc::SourceLocation;
use crate::operation::OperationKind;
use std::sync::Arc;
use thiserror::Error;

/// Any fatal condition that aborts a
/// [`DocumentCompiler`](crate::operation::DocumentCompiler) call.
///
/// There is no partial compilation: the first error encountered is returned
/// and no IR is produced.
#[derive(Clone, Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    InternalInvariant(#[from] InternalInvariantError),

    #[error("Failed to parse executable document: {0}")]
    ParseError(Arc<ast::operation::ParseError>),

    #[error(transparent)]
    SchemaReference(#[from] SchemaReferenceError),

    #[error(transparent)]
    Structural(#[from] StructuralError),
}
impl std::convert::From<ast::operation::ParseError> for CompileError {
    fn from(value: ast::operation::ParseError) -> Self {
        Self::ParseError(Arc::new(value))
    }
}

/// A name in the document could not be resolved against the schema.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaReferenceError {
    #[error("Unknown directive `@{directive_name}` at {location}")]
    UndefinedDirective {
        directive_name: String,
        location: SourceLocation,
    },

    #[error(
        "The `@{directive_name}` directive does not declare an argument named \
        `{argument_name}` (at {location})"
    )]
    UndefinedDirectiveArgument {
        argument_name: String,
        directive_name: String,
        location: SourceLocation,
    },

    #[error(
        "Attempted to select a field named `{field_name}` on the \
        `{parent_type_name}` type, but `{parent_type_name}` has no such field \
        defined (at {location})"
    )]
    UndefinedField {
        field_name: String,
        location: SourceLocation,
        parent_type_name: String,
    },

    #[error("Unknown fragment `{fragment_name}` spread at {location}")]
    UndefinedFragment {
        fragment_name: String,
        location: SourceLocation,
    },

    #[error("The schema defines no root type for {operation_kind:?} operations (at {location})")]
    UndefinedRootType {
        location: SourceLocation,
        operation_kind: OperationKind,
    },

    #[error("Unknown type `{type_name}` referenced at {location}")]
    UndefinedType {
        location: SourceLocation,
        type_name: String,
    },
}

/// The document has a shape the compiler cannot turn into IR.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum StructuralError {
    #[error(
        "Fragment `{fragment_name}` is defined more than once: {location1} and \
        {location2}"
    )]
    DuplicateFragmentDefinition {
        fragment_name: String,
        location1: SourceLocation,
        location2: SourceLocation,
    },

    #[error(
        "Operation `{operation_name}` is defined more than once: {location1} \
        and {location2}"
    )]
    DuplicateOperationName {
        location1: SourceLocation,
        location2: SourceLocation,
        operation_name: String,
    },

    #[error("Fragment `{fragment_name}` spreads itself (at {location})")]
    FragmentCycle {
        fragment_name: String,
        location: SourceLocation,
    },

    #[error(
        "Field `{parent_type_name}.{field_name}` has composite type \
        `{field_type_name}` and requires a selection set (at {location})"
    )]
    MissingSelectionSet {
        field_name: String,
        field_type_name: String,
        location: SourceLocation,
        parent_type_name: String,
    },

    #[error(
        "Type condition `{type_name}` must name an object, interface, or union \
        type (at {location})"
    )]
    NonCompositeTypeCondition {
        location: SourceLocation,
        type_name: String,
    },

    #[error(
        "Field `{field_name}` has leaf type `{field_type_name}` and cannot have \
        a selection set (at {location})"
    )]
    SelectionSetOnLeafField {
        field_name: String,
        field_type_name: String,
        location: SourceLocation,
    },

    #[error("Operations must be named (at {location})")]
    UnnamedOperation {
        location: SourceLocation,
    },
}

/// A condition that a validated document/schema pairing makes impossible.
/// Seeing one of these means upstream validation let something through.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InternalInvariantError {
    #[error(
        "Cannot merge fields selected as `{response_key}`: `{first_type}` and \
        `{second_type}` are different types"
    )]
    FieldMergeConflict {
        first_type: String,
        response_key: String,
        second_type: String,
    },

    #[error("No fragment is stored at index {fragment_index} of the fragment table")]
    FragmentMissingFromTable {
        fragment_index: usize,
    },

    #[error(
        "Attempted to look up field `{field_name}` directly on union type \
        `{union_name}`"
    )]
    FieldOnUnionType {
        field_name: String,
        union_name: String,
    },

    #[error("Int literal `{literal}` does not fit in a 64-bit integer")]
    IntValueOutOfRange {
        literal: String,
    },

    #[error("Attempted to select fields on non-composite type `{type_name}`")]
    NonCompositeParentType {
        type_name: String,
    },

    #[error("Type `{type_name}` is referenced by the schema but not defined in it")]
    TypeMissingFromSchema {
        type_name: String,
    },
}
