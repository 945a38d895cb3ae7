use crate::ast;
use crate::operation::DocumentCompiler;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::operation::SourceDocument;
use crate::schema::Schema;
use crate::tests::test_utils;
use crate::CompileError;
use crate::SchemaReferenceError;
use crate::StructuralError;
use crate::Value;
use std::path::Path;

type Result<T> = std::result::Result<T, CompileError>;

fn compile_err(schema: &Schema, src: &str) -> CompileError {
    match DocumentCompiler::new(schema).compile_str(None, src) {
        Ok(_) => panic!("expected compilation to fail"),
        Err(err) => err,
    }
}

mod basics {
    use super::*;

    #[test]
    fn simple_query() -> Result<()> {
        let schema = test_utils::starwars_schema();
        let compiled = DocumentCompiler::new(&schema).compile_str(None, r#"
            query HeroName {
              hero {
                name
              }
            }
        "#)?;

        assert_eq!(compiled.operations().len(), 1);
        let op = &compiled.operations()[0];
        assert_eq!(op.name(), "HeroName");
        assert_eq!(op.kind(), OperationKind::Query);
        assert_eq!(op.root_type_name(), "Query");
        assert_eq!(op.source(), "query HeroName {\n  hero {\n    name\n  }\n}");

        let Selection::Field(hero) = &op.selection_set().selections()[0] else {
            panic!("expected a field selection");
        };
        assert_eq!(hero.response_key(), "hero");
        assert_eq!(hero.parent_type_name(), "Query");
        assert_eq!(hero.type_annotation().to_graphql_string(), "Character");

        let hero_set = hero.selection_set().expect("hero is composite");
        assert_eq!(hero_set.parent_type_name(), "Character");
        assert_eq!(
            test_utils::type_names(&schema, hero_set.possible_types()),
            vec!["Human", "Droid"],
        );
        Ok(())
    }

    #[test]
    fn mutation_uses_mutation_root() -> Result<()> {
        let schema = test_utils::starwars_schema();
        let compiled = test_utils::compile(&schema, r#"
            mutation AddReview($review: ReviewInput!) {
              createReview(episode: JEDI, review: $review) {
                stars
              }
            }
        "#);

        let op = compiled.operation("AddReview").expect("operation should exist");
        assert_eq!(op.kind(), OperationKind::Mutation);
        assert_eq!(op.root_type_name(), "Mutation");
        Ok(())
    }

    #[test]
    fn variables_keep_declaration_order_and_defaults() -> Result<()> {
        let schema = test_utils::starwars_schema();
        let compiled = test_utils::compile(&schema, r#"
            query Search($text: String = "R2", $episode: Episode!) {
              hero(episode: $episode) { id }
              search(text: $text) { __typename }
            }
        "#);

        let op = compiled.operation("Search").expect("operation should exist");
        let names: Vec<_> = op.variables().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["text", "episode"]);

        let text = &op.variables()["text"];
        assert_eq!(text.default_value(), Some(&Value::String("R2".to_string())));
        assert_eq!(op.variables()["episode"].type_annotation().to_graphql_string(), "Episode!");
        Ok(())
    }

    #[test]
    fn field_metadata_comes_from_schema() -> Result<()> {
        let schema = test_utils::starwars_schema();
        let compiled = test_utils::compile(&schema, r#"
            query Luke {
              human(id: "1000") {
                name
                weight: mass
              }
            }
        "#);

        let op = compiled.operation("Luke").expect("operation should exist");
        let Selection::Field(human) = &op.selection_set().selections()[0] else {
            panic!("expected a field selection");
        };
        let selections = human.selection_set().expect("human is composite").selections();
        let Selection::Field(name) = &selections[0] else {
            panic!("expected a field selection");
        };
        assert_eq!(name.description(), Some("What this human calls themselves"));
        assert_eq!(name.deprecation_reason(), None);

        let Selection::Field(mass) = &selections[1] else {
            panic!("expected a field selection");
        };
        assert_eq!(mass.alias(), Some("weight"));
        assert_eq!(mass.response_key(), "weight");
        assert_eq!(mass.deprecation_reason(), Some("Use `height`"));
        Ok(())
    }

    #[test]
    fn inline_fragment_narrows_possible_types() -> Result<()> {
        let schema = test_utils::starwars_schema();
        let compiled = test_utils::compile(&schema, r#"
            query Search {
              search(text: "a") {
                ... on Character { name }
                ... { __typename }
              }
            }
        "#);

        let op = compiled.operation("Search").expect("operation should exist");
        let Selection::Field(search) = &op.selection_set().selections()[0] else {
            panic!("expected a field selection");
        };
        let selections = search.selection_set().expect("search is composite").selections();

        let Selection::InlineFragment(on_character) = &selections[0] else {
            panic!("expected an inline fragment");
        };
        assert_eq!(on_character.type_condition(), Some("Character"));
        assert_eq!(on_character.selection_set().parent_type_name(), "Character");
        assert_eq!(
            test_utils::type_names(&schema, on_character.selection_set().possible_types()),
            vec!["Human", "Droid"],
        );

        let Selection::InlineFragment(untyped) = &selections[1] else {
            panic!("expected an inline fragment");
        };
        assert_eq!(untyped.type_condition(), None);
        assert_eq!(untyped.selection_set().parent_type_name(), "SearchResult");
        assert_eq!(
            test_utils::type_names(&schema, untyped.selection_set().possible_types()),
            vec!["Human", "Droid", "Starship"],
        );
        Ok(())
    }

    #[test]
    fn spread_possible_types_intersect_the_scope() -> Result<()> {
        let schema = test_utils::starwars_schema();
        let compiled = test_utils::compile(&schema, r#"
            query Hero {
              hero { ...Searchable }
            }

            fragment Searchable on SearchResult {
              __typename
            }
        "#);

        let op = compiled.operation("Hero").expect("operation should exist");
        let Selection::Field(hero) = &op.selection_set().selections()[0] else {
            panic!("expected a field selection");
        };
        let Selection::FragmentSpread(spread) =
            &hero.selection_set().expect("hero is composite").selections()[0]
        else {
            panic!("expected a fragment spread");
        };
        assert_eq!(spread.fragment_name(), "Searchable");
        assert_eq!(
            test_utils::type_names(&schema, spread.possible_types()),
            vec!["Human", "Droid"],
        );

        let fragment = &compiled.fragments()[spread.fragment_id()];
        assert_eq!(
            test_utils::type_names(&schema, fragment.selection_set().possible_types()),
            vec!["Human", "Droid", "Starship"],
        );
        Ok(())
    }

    #[test]
    fn referenced_types_in_first_reach_order() -> Result<()> {
        let schema = test_utils::starwars_schema();
        let compiled = test_utils::compile(&schema, r#"
            query Hero($episode: Episode) {
              hero(episode: $episode) {
                name
                ... on Human { homePlanet }
              }
            }
        "#);

        assert_eq!(
            compiled.referenced_types().iter().collect::<Vec<_>>(),
            vec!["Episode", "Character", "String", "Human"],
        );
        Ok(())
    }

    #[test]
    fn referenced_types_include_input_object_closure() -> Result<()> {
        let schema = test_utils::starwars_schema();
        let compiled = test_utils::compile(&schema, r#"
            mutation AddReview($review: ReviewInput!) {
              createReview(review: $review) { stars }
            }
        "#);

        assert_eq!(
            compiled.referenced_types().iter().collect::<Vec<_>>(),
            vec!["ReviewInput", "Int", "String", "ColorInput", "Review"],
        );
        Ok(())
    }

    #[test]
    fn introspection_meta_fields_compile() -> Result<()> {
        let schema = test_utils::starwars_schema();
        let compiled = test_utils::compile(&schema, r#"
            query Introspect {
              __typename
              __schema { queryType { name } }
              __type(name: "Droid") { kind }
            }
        "#);

        let op = compiled.operation("Introspect").expect("operation should exist");
        assert_eq!(op.selection_set().selections().len(), 3);
        assert!(compiled.referenced_types().contains("__Schema"));
        assert!(compiled.referenced_types().contains("__TypeKind"));
        Ok(())
    }

    #[test]
    fn file_path_is_recorded_on_locations() -> Result<()> {
        let schema = test_utils::starwars_schema();
        let file_path = Path::new("queries/hero.graphql");
        let compiled = DocumentCompiler::new(&schema).compile_str(
            Some(file_path),
            "query Hero { hero { id } }",
        )?;

        let op = compiled.operation("Hero").expect("operation should exist");
        assert_eq!(op.file_path(), Some(file_path));
        assert_eq!(op.def_location().file_path(), Some(file_path));
        Ok(())
    }

    #[test]
    fn compiling_twice_is_deterministic() -> Result<()> {
        let schema = test_utils::starwars_schema();
        let src = r#"
            query Hero($withFriends: Boolean!) {
              hero {
                ...CharacterFields
                friends @include(if: $withFriends) { ...CharacterFields }
              }
            }

            fragment CharacterFields on Character {
              id
              name
              ... on Droid { primaryFunction }
            }
        "#;

        let first = DocumentCompiler::new(&schema).compile_str(None, src)?;
        let second = DocumentCompiler::new(&schema).compile_str(None, src)?;
        assert_eq!(first, second);
        Ok(())
    }
}

mod fragments {
    use super::*;

    #[test]
    fn fragment_spread_in_many_places_compiles_once() -> Result<()> {
        let schema = test_utils::starwars_schema();
        let compiled = test_utils::compile(&schema, r#"
            query Hero {
              hero {
                ...CharacterFields
                friends { ...CharacterFields }
              }
            }

            query Friends {
              hero { friends { ...CharacterFields } }
            }

            fragment CharacterFields on Character { id name }
        "#);

        assert_eq!(compiled.fragments().len(), 1);
        let fragment = compiled.fragment("CharacterFields").expect("fragment should exist");
        assert_eq!(fragment.type_condition(), "Character");
        assert_eq!(fragment.source(), "fragment CharacterFields on Character {\n  id\n  name\n}");
        Ok(())
    }

    #[test]
    fn repeated_spread_on_one_path_is_skipped() -> Result<()> {
        let schema = test_utils::starwars_schema();
        let compiled = test_utils::compile(&schema, r#"
            query Hero {
              hero {
                ...Name
                ... on Human { ...Name homePlanet }
              }
            }

            fragment Name on Character { name }
        "#);

        let op = compiled.operation("Hero").expect("operation should exist");
        let Selection::Field(hero) = &op.selection_set().selections()[0] else {
            panic!("expected a field selection");
        };
        let selections = hero.selection_set().expect("hero is composite").selections();
        assert!(matches!(&selections[0], Selection::FragmentSpread(_)));
        let Selection::InlineFragment(on_human) = &selections[1] else {
            panic!("expected an inline fragment");
        };
        let nested = on_human.selection_set().selections();
        assert_eq!(nested.len(), 1);
        assert!(matches!(&nested[0], Selection::Field(field) if field.name() == "homePlanet"));
        assert_eq!(compiled.fragments().len(), 1);
        Ok(())
    }

    #[test]
    fn sibling_inline_fragments_may_spread_the_same_fragment() -> Result<()> {
        let schema = test_utils::starwars_schema();
        let compiled = test_utils::compile(&schema, r#"
            query Hero {
              hero {
                ... on Human { ...Name }
                ... on Droid { ...Name }
              }
            }

            fragment Name on Character { name }
        "#);

        let op = compiled.operation("Hero").expect("operation should exist");
        let Selection::Field(hero) = &op.selection_set().selections()[0] else {
            panic!("expected a field selection");
        };
        for selection in hero.selection_set().expect("hero is composite").selections() {
            let Selection::InlineFragment(inline) = selection else {
                panic!("expected an inline fragment");
            };
            assert!(matches!(
                &inline.selection_set().selections()[0],
                Selection::FragmentSpread(spread) if spread.fragment_name() == "Name",
            ));
        }
        Ok(())
    }

    #[test]
    fn direct_spreads_are_recorded_in_first_reference_order() -> Result<()> {
        let schema = test_utils::starwars_schema();
        let compiled = test_utils::compile(&schema, r#"
            query Hero {
              hero {
                ... on Droid { ...DroidFields }
                ...Name
                friends { ...Name }
              }
            }

            fragment Name on Character { name }
            fragment DroidFields on Droid { primaryFunction ...Name }
        "#);

        let op = compiled.operation("Hero").expect("operation should exist");
        let spread_names: Vec<_> = op.fragment_spreads().iter()
            .map(|id| compiled.fragments()[*id].name())
            .collect();
        assert_eq!(spread_names, vec!["DroidFields", "Name"]);

        let droid_fields = compiled.fragment("DroidFields").expect("fragment should exist");
        assert_eq!(droid_fields.fragment_spreads().len(), 1);
        Ok(())
    }

    #[test]
    fn unspread_fragments_are_still_compiled() -> Result<()> {
        let schema = test_utils::starwars_schema();
        let compiled = test_utils::compile(&schema, r#"
            fragment Orphan on Starship { name }
        "#);

        assert!(compiled.operations().is_empty());
        assert!(compiled.fragment("Orphan").is_some());
        assert!(compiled.referenced_types().contains("Starship"));
        Ok(())
    }

    #[test]
    fn fragments_may_be_spread_across_documents() -> Result<()> {
        let schema = test_utils::starwars_schema();
        let queries = ast::operation::parse("query Hero { hero { ...Name } }")?;
        let fragments = ast::operation::parse("fragment Name on Character { name }")?;

        let compiled = DocumentCompiler::new(&schema).compile_many(&[
            SourceDocument {
                document: &queries,
                file_path: Some(Path::new("hero.graphql")),
            },
            SourceDocument {
                document: &fragments,
                file_path: Some(Path::new("fragments.graphql")),
            },
        ])?;

        let fragment = compiled.fragment("Name").expect("fragment should exist");
        assert_eq!(fragment.file_path(), Some(Path::new("fragments.graphql")));
        Ok(())
    }
}

mod errors {
    use super::*;

    #[test]
    fn parse_error() {
        let schema = test_utils::starwars_schema();
        let err = compile_err(&schema, "query Hero { hero { ");
        assert!(matches!(err, CompileError::ParseError(_)));
    }

    #[test]
    fn unnamed_operation() {
        let schema = test_utils::starwars_schema();
        assert!(matches!(
            compile_err(&schema, "query { hero { id } }"),
            CompileError::Structural(StructuralError::UnnamedOperation { .. }),
        ));
        assert!(matches!(
            compile_err(&schema, "{ hero { id } }"),
            CompileError::Structural(StructuralError::UnnamedOperation { .. }),
        ));
    }

    #[test]
    fn duplicate_operation_name() {
        let schema = test_utils::starwars_schema();
        let err = compile_err(&schema, r#"
            query Hero { hero { id } }
            query Hero { hero { name } }
        "#);

        assert!(matches!(
            err,
            CompileError::Structural(StructuralError::DuplicateOperationName {
                operation_name,
                ..
            }) if operation_name == "Hero",
        ));
    }

    #[test]
    fn duplicate_fragment_definition() {
        let schema = test_utils::starwars_schema();
        let err = compile_err(&schema, r#"
            fragment Name on Character { name }
            fragment Name on Human { name }
        "#);

        assert!(matches!(
            err,
            CompileError::Structural(StructuralError::DuplicateFragmentDefinition {
                fragment_name,
                ..
            }) if fragment_name == "Name",
        ));
    }

    #[test]
    fn undefined_root_type() {
        let schema = test_utils::animals_schema();
        let err = compile_err(&schema, "mutation Adopt { __typename }");

        assert!(matches!(
            err,
            CompileError::SchemaReference(SchemaReferenceError::UndefinedRootType {
                operation_kind: OperationKind::Mutation,
                ..
            }),
        ));
    }

    #[test]
    fn undefined_field() {
        let schema = test_utils::starwars_schema();
        let err = compile_err(&schema, "query Hero { hero { homePlanet } }");

        assert!(matches!(
            err,
            CompileError::SchemaReference(SchemaReferenceError::UndefinedField {
                field_name,
                parent_type_name,
                ..
            }) if field_name == "homePlanet" && parent_type_name == "Character",
        ));
    }

    #[test]
    fn undefined_fragment() {
        let schema = test_utils::starwars_schema();
        let err = compile_err(&schema, "query Hero { hero { ...Missing } }");

        assert!(matches!(
            err,
            CompileError::SchemaReference(SchemaReferenceError::UndefinedFragment {
                fragment_name,
                ..
            }) if fragment_name == "Missing",
        ));
    }

    #[test]
    fn undefined_type_condition() {
        let schema = test_utils::starwars_schema();
        let err = compile_err(&schema, "query Hero { hero { ... on Wookiee { id } } }");

        assert!(matches!(
            err,
            CompileError::SchemaReference(SchemaReferenceError::UndefinedType {
                type_name,
                ..
            }) if type_name == "Wookiee",
        ));
    }

    #[test]
    fn undefined_variable_type() {
        let schema = test_utils::starwars_schema();
        let err = compile_err(&schema, "query Hero($e: Era) { hero { id } }");

        assert!(matches!(
            err,
            CompileError::SchemaReference(SchemaReferenceError::UndefinedType {
                type_name,
                ..
            }) if type_name == "Era",
        ));
    }

    #[test]
    fn non_composite_type_condition() {
        let schema = test_utils::starwars_schema();
        let err = compile_err(&schema, "fragment Bad on Episode { __typename }");

        assert!(matches!(
            err,
            CompileError::Structural(StructuralError::NonCompositeTypeCondition {
                type_name,
                ..
            }) if type_name == "Episode",
        ));
    }

    #[test]
    fn missing_selection_set() {
        let schema = test_utils::starwars_schema();
        let err = compile_err(&schema, "query Hero { hero }");

        assert!(matches!(
            err,
            CompileError::Structural(StructuralError::MissingSelectionSet {
                field_name,
                field_type_name,
                ..
            }) if field_name == "hero" && field_type_name == "Character",
        ));
    }

    #[test]
    fn selection_set_on_leaf_field() {
        let schema = test_utils::starwars_schema();
        let err = compile_err(&schema, "query Hero { hero { name { length } } }");

        assert!(matches!(
            err,
            CompileError::Structural(StructuralError::SelectionSetOnLeafField {
                field_name,
                ..
            }) if field_name == "name",
        ));
    }

    #[test]
    fn fragment_cycle() {
        let schema = test_utils::starwars_schema();
        let err = compile_err(&schema, r#"
            query Hero { hero { ...A } }
            fragment A on Character { friends { ...B } }
            fragment B on Character { friends { ...A } }
        "#);

        assert!(matches!(
            err,
            CompileError::Structural(StructuralError::FragmentCycle { fragment_name, .. })
                if fragment_name == "A",
        ));
    }

    #[test]
    fn self_spreading_fragment() {
        let schema = test_utils::starwars_schema();
        let err = compile_err(&schema, r#"
            fragment Loop on Character { friends { ...Loop } }
        "#);

        assert!(matches!(
            err,
            CompileError::Structural(StructuralError::FragmentCycle { fragment_name, .. })
                if fragment_name == "Loop",
        ));
    }

    #[test]
    fn field_on_union_is_an_invariant_violation() {
        let schema = test_utils::starwars_schema();
        let err = compile_err(&schema, r#"query Search { search(text: "x") { name } }"#);

        assert!(matches!(err, CompileError::InternalInvariant(_)));
    }
}

mod concurrency {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn one_schema_serves_concurrent_compiles() {
        let schema = test_utils::starwars_schema();
        let compiler = DocumentCompiler::new(&schema);
        let sources: Vec<String> = (0..32)
            .map(|idx| format!(
                "query Q{idx} {{ hero {{ ...F{idx} }} }} fragment F{idx} on Character {{ id }}",
            ))
            .collect();

        let results: Vec<_> = sources.par_iter()
            .map(|src| compiler.compile_str(None, src.as_str()))
            .collect();

        for (idx, result) in results.into_iter().enumerate() {
            let compiled = result.expect("document should compile");
            let fragment_name = format!("F{idx}");
            assert!(compiled.fragment(fragment_name.as_str()).is_some());
            assert_eq!(compiled.fragments().len(), 1);
        }
    }
}
