use clap::CommandFactory;
use clap::Parser;
use crate::commands::CommandEnum;
use crate::Cli;
use std::path::Path;
use std::path::PathBuf;

const SCHEMA: &str = "
interface Character { name: String! }
type Human implements Character { name: String! height: Float }
type Droid implements Character { name: String! primaryFunction: String }
type Query { hero: Character }
";

const OPERATIONS: &str = "
query Hero {
  hero {
    name
    ... on Human { height }
  }
}
";

fn scratch_project(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "graphql-ir-cli-{name}-{}",
        std::process::id(),
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(dir.join("ops")).unwrap();
    std::fs::write(dir.join("schema.graphql"), SCHEMA).unwrap();
    std::fs::write(dir.join("ops/hero.graphql"), OPERATIONS).unwrap();
    dir
}

fn parse_args(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("graphql-ir").chain(args.iter().copied()))
        .unwrap()
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn compile_requires_a_schema() {
    let result = Cli::try_parse_from(["graphql-ir", "compile", "ops/"]);
    assert!(result.is_err());
}

#[test]
fn compile_requires_an_input_path() {
    let result = Cli::try_parse_from(["graphql-ir", "compile", "--schema", "schema.graphql"]);
    assert!(result.is_err());
}

#[test]
fn file_exts_are_comma_delimited() {
    let cli = parse_args(&[
        "manifest",
        "--schema", "schema.graphql",
        "--graphql-file-exts", ".graphql,gql",
        "ops/",
    ]);
    let Some(CommandEnum::Manifest(cmd)) = cli.cmd else {
        panic!("Expected the manifest subcommand");
    };
    assert_eq!(cmd.inputs.graphql_file_exts, vec![".graphql", "gql"]);
    assert_eq!(cmd.inputs.file_or_dir_paths, vec![PathBuf::from("ops/")]);
    assert_eq!(cmd.output, None);
}

#[test]
fn verbose_flag_is_global() {
    let cli = parse_args(&["compile", "--schema", "s.graphql", "-v", "ops/"]);
    assert!(cli.verbose);
}

#[test]
fn compile_merges_fragment_spreads_by_default() {
    let cli = parse_args(&[
        "compile",
        "--schema", "a.graphql",
        "--schema", "b.graphql",
        "ops/",
    ]);
    let Some(CommandEnum::Compile(cmd)) = cli.cmd else {
        panic!("Expected the compile subcommand");
    };
    assert!(!cmd.no_merge_fragment_spreads);
    assert_eq!(cmd.schema, vec![
        PathBuf::from("a.graphql"),
        PathBuf::from("b.graphql"),
    ]);
}

#[tokio::test]
async fn compile_summarizes_each_operation() {
    let dir = scratch_project("compile");
    let mut cli = parse_args(&[
        "compile",
        "--schema", &path_arg(&dir.join("schema.graphql")),
        &path_arg(&dir),
    ]);
    let cmd = cli.cmd.take().unwrap();
    let result = cmd.run(cli).await;

    assert_eq!(result.stderr, None);
    let stdout = result.stdout.unwrap();
    assert!(stdout.starts_with("query Hero ("), "{stdout}");
    assert!(stdout.contains("hero:"), "{stdout}");
    assert!(stdout.contains("[Human]"), "{stdout}");
    assert!(stdout.contains("height"), "{stdout}");
    assert!(stdout.contains("[Droid]"), "{stdout}");
    assert!(stdout.contains("Compiled 1 operation and 0 fragments."), "{stdout}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn manifest_writes_json_keyed_by_operation_id() {
    let dir = scratch_project("manifest");
    let output_path = dir.join("manifest.json");
    let mut cli = parse_args(&[
        "manifest",
        "--schema", &path_arg(&dir.join("schema.graphql")),
        "--output", &path_arg(&output_path),
        &path_arg(&dir.join("ops")),
    ]);
    let cmd = cli.cmd.take().unwrap();
    let result = cmd.run(cli).await;
    assert_eq!(result.stderr, None);

    let json = std::fs::read_to_string(&output_path).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entries = manifest.as_object().unwrap();
    assert_eq!(entries.len(), 1);
    let (id, entry) = entries.iter().next().unwrap();
    assert_eq!(id.len(), 64);
    assert_eq!(entry["name"], "Hero");
    assert!(entry["source"].as_str().unwrap().starts_with("query Hero"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn compile_errors_are_reported_on_stderr() {
    let dir = scratch_project("compile-error");
    std::fs::write(
        dir.join("ops/broken.graphql"),
        "query Broken { hero { mass } }",
    ).unwrap();
    let mut cli = parse_args(&[
        "compile",
        "--schema", &path_arg(&dir.join("schema.graphql")),
        &path_arg(&dir.join("ops")),
    ]);
    let cmd = cli.cmd.take().unwrap();
    let result = cmd.run(cli).await;

    assert_eq!(result.stdout, None);
    assert!(result.stderr.unwrap().contains("Failed to compile documents"));

    let _ = std::fs::remove_dir_all(&dir);
}
