use crate::merge::FieldMerger;
use crate::operation::FragmentTable;
use crate::operation::Selection;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::tests::test_utils;
use crate::typecase::TypeCase;
use crate::typecase::TypeCasePartitioner;
use crate::typecase::Variant;
use crate::types::ObjectTypeId;
use crate::types::PossibleTypes;
use proptest::prelude::*;
use std::collections::HashSet;

const NUM_TYPES: usize = 8;

fn set_from_mask(mask: u8) -> PossibleTypes {
    PossibleTypes::from_ids(
        NUM_TYPES,
        (0..NUM_TYPES).filter(|idx| mask & (1 << idx) != 0).map(ObjectTypeId::from),
    )
}

/// Every type of the default variant appears in exactly one exhaustive
/// variant, and named variants are pairwise disjoint.
fn assert_exhaustive_and_disjoint(type_case: &TypeCase) {
    let exhaustive = type_case.exhaustive_variants();
    let mut covered = PossibleTypes::empty(type_case.default_variant().possible_types().capacity());
    for variant in &exhaustive {
        assert!(!variant.possible_types().is_empty(), "empty variant");
        assert!(covered.is_disjoint(variant.possible_types()), "overlapping variants");
        covered = covered.union(variant.possible_types());
    }
    assert_eq!(&covered, type_case.default_variant().possible_types());
}

proptest! {
    #[test]
    fn disjoint_variants_exactly_cover_each_request(
        default_mask in 1u8..=u8::MAX,
        request_masks in prop::collection::vec(any::<u8>(), 0..12),
    ) {
        let default_types = set_from_mask(default_mask);
        let mut type_case = TypeCase::new("Node", default_types.clone());

        for request_mask in request_masks {
            let requested = set_from_mask(request_mask);
            let slots = type_case.disjoint_variants_for(&requested);

            let mut returned = PossibleTypes::empty(NUM_TYPES);
            for slot in slots {
                returned = returned.union(type_case.variant_mut(slot).possible_types());
            }
            prop_assert_eq!(returned, requested.intersection(&default_types));
            assert_exhaustive_and_disjoint(&type_case);
        }
    }
}

const TYPE_CONDITIONS: [&str; 10] = [
    "A", "B", "C", "D", "IAB", "IBC", "ICD", "IAD", "IABC", "U",
];

const CONDITIONS_SCHEMA: &str = r#"
interface IAB { id: ID }
interface IBC { id: ID }
interface ICD { id: ID }
interface IAD { id: ID }
interface IABC { id: ID }

type A implements IAB & IAD & IABC { id: ID }
type B implements IAB & IBC & IABC { id: ID }
type C implements IBC & ICD & IABC { id: ID }
type D implements ICD & IAD { id: ID }

union U = A | B | C | D

type Query { things: [U] }
"#;

fn conditions_schema() -> Schema {
    SchemaBuilder::from_str(None, CONDITIONS_SCHEMA).expect("schema should build")
}

fn has_response_key(schema: &Schema, variant: &Variant, key: &str) -> bool {
    FieldMerger::new(schema, &FragmentTable::new())
        .merge_fields(variant)
        .expect("variant fields should merge")
        .iter()
        .any(|merged_field| merged_field.response_key() == key)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn each_variant_sees_exactly_the_conditions_it_satisfies(
        condition_indices in prop::collection::vec(0..TYPE_CONDITIONS.len(), 0..6),
    ) {
        let schema = conditions_schema();
        let mut query = String::from("query Things { things { __typename ");
        for (idx, condition_idx) in condition_indices.iter().enumerate() {
            query.push_str(
                format!("... on {} {{ c{idx}: __typename }} ", TYPE_CONDITIONS[*condition_idx])
                    .as_str(),
            );
        }
        query.push_str("} }");

        let compiled = test_utils::compile(&schema, query.as_str());
        let Selection::Field(things) = &compiled.operations()[0].selection_set().selections()[0]
        else {
            panic!("expected a field selection");
        };
        let type_case = TypeCasePartitioner::new(compiled.fragments())
            .partition(things.selection_set().expect("things is composite"))
            .expect("selections should partition");

        assert_exhaustive_and_disjoint(&type_case);
        for variant in type_case.exhaustive_variants() {
            let mut selected_keys = HashSet::new();
            for selection in variant.selections() {
                let Selection::Field(field) = selection else {
                    panic!("expected only field selections");
                };
                prop_assert!(
                    selected_keys.insert(field.response_key()),
                    "`{}` selected more than once",
                    field.response_key(),
                );
            }
            prop_assert!(has_response_key(&schema, &variant, "__typename"));
            for (idx, condition_idx) in condition_indices.iter().enumerate() {
                let condition_types = schema.possible_types(TYPE_CONDITIONS[*condition_idx])
                    .expect("condition is composite");
                prop_assert_eq!(
                    has_response_key(&schema, &variant, format!("c{idx}").as_str()),
                    variant.possible_types().is_subset(condition_types),
                );
            }
        }
    }
}
