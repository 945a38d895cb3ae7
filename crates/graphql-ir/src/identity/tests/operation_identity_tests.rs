use crate::identity::fragment_closure;
use crate::identity::identify;
use crate::identity::OperationIdentity;
use crate::operation::CompiledDocument;
use crate::tests::test_utils;
use sha2::Digest;
use sha2::Sha256;

fn identity_of(compiled: &CompiledDocument, operation_name: &str) -> OperationIdentity {
    let op = compiled.operation(operation_name).expect("operation should exist");
    identify(op, compiled.fragments())
}

#[test]
fn id_is_sha256_of_canonical_source() {
    let schema = test_utils::starwars_schema();
    let compiled = test_utils::compile(&schema, "query Hero { hero { name } }");

    let identity = identity_of(&compiled, "Hero");
    assert_eq!(identity.canonical_source, "query Hero {\n  hero {\n    name\n  }\n}");
    assert_eq!(identity.id, hex::encode(Sha256::digest(identity.canonical_source.as_bytes())));
    assert_eq!(identity.id.len(), 64);
}

#[test]
fn fragments_follow_the_operation_in_first_reference_order() {
    let schema = test_utils::starwars_schema();
    let compiled = test_utils::compile(&schema, r#"
        fragment Name on Character { name }
        fragment Friends on Character { friends { ...Name } }
        query Hero { hero { ...Friends ...Name } }
    "#);

    let identity = identity_of(&compiled, "Hero");
    let friends_at = identity.canonical_source.find("fragment Friends").expect("Friends included");
    let name_at = identity.canonical_source.find("fragment Name").expect("Name included");
    assert!(identity.canonical_source.starts_with("query Hero"));
    assert!(friends_at < name_at);
    assert_eq!(identity.canonical_source.matches("fragment Name").count(), 1);
}

#[test]
fn declaration_order_does_not_matter() {
    let schema = test_utils::starwars_schema();
    let before = test_utils::compile(&schema, r#"
        fragment Name on Character { name }
        fragment Id on Character { id }
        query Hero { hero { ...Id ...Name } }
    "#);
    let after = test_utils::compile(&schema, r#"
        query Hero { hero { ...Id ...Name } }
        fragment Id on Character { id }
        fragment Name on Character { name }
    "#);

    assert_eq!(identity_of(&before, "Hero"), identity_of(&after, "Hero"));
}

#[test]
fn formatting_and_comments_do_not_matter() {
    let schema = test_utils::starwars_schema();
    let compact = test_utils::compile(
        &schema,
        "query Hero($e: Episode){hero(episode:$e){...Name}} fragment Name on Character{name}",
    );
    let spacious = test_utils::compile(&schema, r#"
        # Fetches the hero for an episode.
        query Hero(
          $e: Episode
        ) {
          hero(episode: $e) {
            # Spread the shared name fragment.
            ...Name
          }
        }

        fragment Name on Character {
          name
        }
    "#);

    assert_eq!(identity_of(&compact, "Hero"), identity_of(&spacious, "Hero"));
}

#[test]
fn transitive_fragment_changes_change_the_id() {
    let schema = test_utils::starwars_schema();
    let original = test_utils::compile(&schema, r#"
        query Hero { hero { ...Outer } }
        fragment Outer on Character { friends { ...Inner } }
        fragment Inner on Character { name }
    "#);
    let changed = test_utils::compile(&schema, r#"
        query Hero { hero { ...Outer } }
        fragment Outer on Character { friends { ...Inner } }
        fragment Inner on Character { id }
    "#);

    assert_ne!(identity_of(&original, "Hero").id, identity_of(&changed, "Hero").id);
}

#[test]
fn unreferenced_fragments_do_not_contribute() {
    let schema = test_utils::starwars_schema();
    let alone = test_utils::compile(&schema, "query Hero { hero { id } }");
    let with_extra = test_utils::compile(&schema, r#"
        query Hero { hero { id } }
        fragment Unused on Character { name }
    "#);

    assert_eq!(identity_of(&alone, "Hero"), identity_of(&with_extra, "Hero"));
}

#[test]
fn operation_caches_its_identity() {
    let schema = test_utils::starwars_schema();
    let compiled = test_utils::compile(&schema, r#"
        query Hero { hero { ...Name } }
        fragment Name on Character { name }
    "#);

    let op = compiled.operation("Hero").expect("operation should exist");
    let first = op.identity(compiled.fragments());
    let second = op.identity(compiled.fragments());
    assert!(std::ptr::eq(first, second));
    assert_eq!(first, &identify(op, compiled.fragments()));
}

#[test]
fn closure_visits_each_fragment_once() {
    let schema = test_utils::starwars_schema();
    let compiled = test_utils::compile(&schema, r#"
        query Hero { hero { ...A ...B } }
        fragment A on Character { ...C }
        fragment B on Character { ...C friends { ...A } }
        fragment C on Character { id }
    "#);

    let op = compiled.operation("Hero").expect("operation should exist");
    let names: Vec<_> = fragment_closure(op.fragment_spreads(), compiled.fragments())
        .into_iter()
        .map(|id| compiled.fragments()[id].name())
        .collect();
    assert_eq!(names, vec!["A", "C", "B"]);
}

#[test]
fn identity_serializes_in_camel_case() {
    let identity = OperationIdentity {
        canonical_source: "query Q { a }".to_string(),
        id: "abc".to_string(),
    };

    assert_eq!(
        serde_json::to_value(&identity).expect("identity should serialize"),
        serde_json::json!({ "canonicalSource": "query Q { a }", "id": "abc" }),
    );
}
