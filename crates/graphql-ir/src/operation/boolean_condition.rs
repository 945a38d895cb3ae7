use crate::operation::InlineFragmentSelection;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::types::PossibleTypes;
use crate::DirectiveAnnotation;
use crate::Value;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BooleanConditionKind {
    Include,
    Skip,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ConditionValue {
    Literal(bool),
    Variable(String),
}

/// An `@include` or `@skip` directive applied to a selection.
///
/// Conditions never remove a selection from the IR. They mark the selection
/// (and, for fields, the merged field) as conditionally present.
#[derive(Clone, Debug, PartialEq)]
pub struct BooleanCondition {
    annotation: DirectiveAnnotation,
    kind: BooleanConditionKind,
    value: ConditionValue,
}
impl BooleanCondition {
    /// Interpret `annotation` as a boolean condition. Returns `None` for any
    /// directive other than `@include`/`@skip`, or when its `if` argument is
    /// neither a boolean literal nor a variable.
    pub fn from_directive(annotation: &DirectiveAnnotation) -> Option<Self> {
        let kind = match annotation.name() {
            "include" => BooleanConditionKind::Include,
            "skip" => BooleanConditionKind::Skip,
            _ => return None,
        };

        let value = match annotation.argument("if")?.value() {
            Value::Bool(value) => ConditionValue::Literal(*value),
            Value::Variable(var_name) => ConditionValue::Variable(var_name.clone()),
            _ => return None,
        };

        Some(Self {
            annotation: annotation.clone(),
            kind,
            value,
        })
    }

    pub fn annotation(&self) -> &DirectiveAnnotation {
        &self.annotation
    }

    /// `@include(if: true)` and `@skip(if: false)` never exclude anything.
    pub fn is_always_satisfied(&self) -> bool {
        matches!(
            (self.kind, &self.value),
            (BooleanConditionKind::Include, ConditionValue::Literal(true))
                | (BooleanConditionKind::Skip, ConditionValue::Literal(false)),
        )
    }

    pub fn kind(&self) -> BooleanConditionKind {
        self.kind
    }

    pub fn value(&self) -> &ConditionValue {
        &self.value
    }
}

/// Re-wrap `selections` in the given condition chain.
///
/// The wrapper is an inline fragment with no type condition that carries the
/// condition directives, which is how a GraphQL document itself spells "these
/// selections only apply when ...".
pub(crate) fn wrap_in_boolean_conditions(
    selections: Vec<Selection>,
    conditions: &[BooleanCondition],
    parent_type: &str,
    possible_types: &PossibleTypes,
) -> Vec<Selection> {
    let Some(first_condition) = conditions.first() else {
        return selections;
    };

    vec![Selection::InlineFragment(InlineFragmentSelection {
        def_location: first_condition.annotation.def_location().clone(),
        directives: conditions.iter()
            .map(|condition| condition.annotation.clone())
            .collect(),
        selection_set: SelectionSet {
            parent_type: parent_type.to_string(),
            possible_types: possible_types.clone(),
            selections,
        },
        type_condition: None,
    })]
}

