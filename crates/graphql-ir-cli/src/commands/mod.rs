mod compile;
mod manifest;

use anyhow::Context;
use crate::input_files::InputFileArgs;
use crate::Cli;
use crate::CommandResult;
use graphql_ir::ast;
use graphql_ir::operation::CompiledDocument;
use graphql_ir::operation::DocumentCompiler;
use graphql_ir::operation::SourceDocument;
use graphql_ir::schema::Schema;
use graphql_ir::schema::SchemaBuilder;
use std::path::PathBuf;

pub(crate) use compile::CompileCmd;
pub(crate) use manifest::ManifestCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-ir")]
pub(crate) enum CommandEnum {
    /// Compile operations and print a summary of each one's IR.
    Compile(Box<CompileCmd>),

    /// Write a persisted-query manifest for every operation.
    Manifest(Box<ManifestCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Compile(cmd) => cmd.run(cli).await,
            Self::Manifest(cmd) => cmd.run(cli).await,
        }
    }
}

pub(crate) fn load_schema(schema_paths: &[PathBuf]) -> anyhow::Result<Schema> {
    log::debug!("Loading {} schema files...", schema_paths.len());
    let schema = SchemaBuilder::new()
        .load_files(schema_paths.to_vec())
        .context("Failed to load schema")?
        .build()
        .context("Failed to build schema")?;
    Ok(schema)
}

/// Read, parse, and compile every input document as one unit against
/// `schema`.
pub(crate) fn compile_inputs(
    schema: &Schema,
    schema_paths: &[PathBuf],
    inputs: &InputFileArgs,
) -> anyhow::Result<CompiledDocument> {
    let file_paths = inputs.collect_file_paths(schema_paths)?;
    if file_paths.is_empty() {
        anyhow::bail!("No GraphQL documents found in the given paths");
    }

    let mut documents = Vec::with_capacity(file_paths.len());
    for file_path in &file_paths {
        let content = std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read `{}`", file_path.display()))?;
        let document = ast::operation::parse(&content)
            .with_context(|| format!("Failed to parse `{}`", file_path.display()))?;
        documents.push(document);
    }

    let sources: Vec<SourceDocument<'_>> = documents.iter()
        .zip(file_paths.iter())
        .map(|(document, file_path)| SourceDocument {
            document,
            file_path: Some(file_path.as_path()),
        })
        .collect();

    let compiled = DocumentCompiler::new(schema)
        .compile_many(&sources)
        .context("Failed to compile documents")?;
    log::debug!(
        "Compiled {} operations and {} fragments from {} files.",
        compiled.operations().len(),
        compiled.fragments().len(),
        file_paths.len(),
    );
    Ok(compiled)
}
