use crate::input_files::normalize_exts;
use crate::input_files::InputFileArgs;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "graphql-ir-cli-{name}-{}",
        std::process::id(),
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, "").unwrap();
}

fn input_args(paths: Vec<PathBuf>) -> InputFileArgs {
    InputFileArgs {
        graphql_file_exts: vec!["graphql".to_string(), "gql".to_string()],
        file_or_dir_paths: paths,
    }
}

#[test]
fn normalize_exts_strips_leading_dots_and_blanks() {
    let exts = normalize_exts(&[
        ".graphql".to_string(),
        "gql".to_string(),
        " ".to_string(),
    ]);
    assert_eq!(exts, HashSet::from([
        "graphql".to_string(),
        "gql".to_string(),
    ]));
}

#[test]
fn directory_scan_filters_by_extension_and_excludes_schema() {
    let dir = scratch_dir("scan");
    touch(&dir.join("schema.graphql"));
    touch(&dir.join("notes.txt"));
    touch(&dir.join("ops/b.gql"));
    touch(&dir.join("ops/a.graphql"));

    let args = input_args(vec![dir.clone()]);
    let found = args.collect_file_paths(&[dir.join("schema.graphql")]).unwrap();

    let expected = vec![
        std::fs::canonicalize(dir.join("ops/a.graphql")).unwrap(),
        std::fs::canonicalize(dir.join("ops/b.gql")).unwrap(),
    ];
    assert_eq!(found, expected);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn same_file_reached_twice_is_listed_once() {
    let dir = scratch_dir("dedupe");
    touch(&dir.join("a.graphql"));

    let args = input_args(vec![dir.clone(), dir.join("a.graphql")]);
    let found = args.collect_file_paths(&[]).unwrap();
    assert_eq!(found.len(), 1);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn single_explicit_file_ignores_extension_filter() {
    let dir = scratch_dir("explicit");
    let file_path = dir.join("operations.txt");
    touch(&file_path);

    let args = input_args(vec![file_path.clone()]);
    let found = args.collect_file_paths(&[]).unwrap();
    assert_eq!(found, vec![std::fs::canonicalize(&file_path).unwrap()]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_path_is_an_error() {
    let dir = scratch_dir("missing");
    let args = input_args(vec![dir.join("does-not-exist")]);
    assert!(args.collect_file_paths(&[]).is_err());

    let _ = std::fs::remove_dir_all(&dir);
}
