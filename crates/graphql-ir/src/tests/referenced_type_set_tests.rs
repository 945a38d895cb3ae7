use crate::tests::test_utils;
use crate::InternalInvariantError;
use crate::ReferencedTypeSet;

type Result<T> = std::result::Result<T, InternalInvariantError>;

#[test]
fn adding_a_union_adds_its_members() -> Result<()> {
    let schema = test_utils::starwars_schema();
    let mut types = ReferencedTypeSet::new();
    types.add(&schema, "SearchResult")?;

    assert_eq!(
        types.iter().collect::<Vec<_>>(),
        vec!["SearchResult", "Human", "Droid", "Starship"],
    );
    Ok(())
}

#[test]
fn adding_twice_is_idempotent() -> Result<()> {
    let schema = test_utils::starwars_schema();
    let mut types = ReferencedTypeSet::new();
    types.add(&schema, "SearchResult")?;
    let once = types.clone();
    types.add(&schema, "SearchResult")?;
    types.add(&schema, "Human")?;

    assert_eq!(types, once);
    assert_eq!(types.len(), 4);
    Ok(())
}

#[test]
fn input_objects_pull_in_field_types() -> Result<()> {
    let schema = test_utils::starwars_schema();
    let mut types = ReferencedTypeSet::new();
    types.add(&schema, "ReviewInput")?;

    assert_eq!(
        types.iter().collect::<Vec<_>>(),
        vec!["ReviewInput", "Int", "String", "ColorInput"],
    );
    Ok(())
}

#[test]
fn interfaces_do_not_pull_in_implementors() -> Result<()> {
    let schema = test_utils::starwars_schema();
    let mut types = ReferencedTypeSet::new();
    types.add(&schema, "Character")?;

    assert!(types.contains("Character"));
    assert!(!types.contains("Human"));
    Ok(())
}

#[test]
fn unknown_type_is_an_invariant_violation() {
    let schema = test_utils::starwars_schema();
    let mut types = ReferencedTypeSet::new();
    let result = types.add(&schema, "Wookiee");

    assert!(matches!(
        result,
        Err(InternalInvariantError::TypeMissingFromSchema { type_name })
            if type_name == "Wookiee",
    ));
    assert!(types.is_empty());
}
