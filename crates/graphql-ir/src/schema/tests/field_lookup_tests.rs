use crate::tests::test_utils;
use crate::types::GraphQLType;
use crate::InternalInvariantError;

type Result<T> = std::result::Result<T, InternalInvariantError>;

fn lookup<'a>(schema: &'a crate::schema::Schema, type_name: &str) -> &'a GraphQLType {
    schema.lookup_type(type_name).expect("type should exist")
}

#[test]
fn declared_fields_resolve() -> Result<()> {
    let schema = test_utils::starwars_schema();
    let field = schema.field_definition(lookup(&schema, "Character"), "friends")?
        .expect("friends is declared");

    assert_eq!(field.type_annotation().to_graphql_string(), "[Character]");
    Ok(())
}

#[test]
fn undeclared_field_is_none() -> Result<()> {
    let schema = test_utils::starwars_schema();
    assert!(schema.field_definition(lookup(&schema, "Droid"), "homePlanet")?.is_none());
    Ok(())
}

#[test]
fn typename_resolves_on_every_composite_type() -> Result<()> {
    let schema = test_utils::starwars_schema();
    for type_name in ["Human", "Character", "SearchResult", "Query"] {
        let field = schema.field_definition(lookup(&schema, type_name), "__typename")?
            .expect("__typename always resolves");
        assert_eq!(field.type_annotation().to_graphql_string(), "String!");
    }
    Ok(())
}

#[test]
fn schema_and_type_resolve_only_on_query_root() -> Result<()> {
    let schema = test_utils::starwars_schema();
    let query = lookup(&schema, "Query");

    let schema_field = schema.field_definition(query, "__schema")?.expect("__schema on Query");
    assert_eq!(schema_field.type_annotation().to_graphql_string(), "__Schema!");

    let type_field = schema.field_definition(query, "__type")?.expect("__type on Query");
    assert_eq!(type_field.type_annotation().to_graphql_string(), "__Type");
    assert_eq!(
        type_field.parameters().get("name").map(|p| p.type_annotation().to_graphql_string()),
        Some("String!".to_string()),
    );

    assert!(schema.field_definition(lookup(&schema, "Human"), "__schema")?.is_none());
    assert!(schema.field_definition(lookup(&schema, "Mutation"), "__type")?.is_none());
    Ok(())
}

#[test]
fn union_fields_are_an_invariant_violation() {
    let schema = test_utils::starwars_schema();
    let result = schema.field_definition(lookup(&schema, "SearchResult"), "name");

    assert!(matches!(
        result,
        Err(InternalInvariantError::FieldOnUnionType { union_name, .. })
            if union_name == "SearchResult",
    ));
}

#[test]
fn leaf_parent_is_an_invariant_violation() {
    let schema = test_utils::starwars_schema();
    let result = schema.field_definition(lookup(&schema, "Episode"), "name");

    assert!(matches!(
        result,
        Err(InternalInvariantError::NonCompositeParentType { type_name })
            if type_name == "Episode",
    ));
}
