use anyhow::Context;
use crate::commands;
use crate::input_files::InputFileArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_ir::identity::PersistedQueryManifest;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ManifestCmd {
    #[arg(
        help="File to write the manifest JSON to. Printed to stdout when \
             omitted.",
        long,
        short='o',
    )]
    pub(crate) output: Option<PathBuf>,

    #[arg(
        help="Path to a GraphQL schema file. May be repeated.",
        long,
        required=true,
    )]
    pub(crate) schema: Vec<PathBuf>,

    #[command(flatten)]
    pub(crate) inputs: InputFileArgs,
}
impl ManifestCmd {
    fn build_manifest(&self) -> anyhow::Result<PersistedQueryManifest> {
        let schema = commands::load_schema(&self.schema)?;
        let compiled = commands::compile_inputs(&schema, &self.schema, &self.inputs)?;
        let manifest = PersistedQueryManifest::from_document(&compiled)
            .context("Failed to build persisted-query manifest")?;
        Ok(manifest)
    }

    fn write_manifest(&self) -> anyhow::Result<String> {
        let manifest = self.build_manifest()?;
        let json = manifest.to_json_pretty()?;
        match &self.output {
            Some(output_path) => {
                std::fs::write(output_path, format!("{json}\n"))
                    .with_context(|| format!(
                        "Failed to write `{}`",
                        output_path.display(),
                    ))?;
                log::info!("Wrote manifest to {output_path:#?}.");
                Ok(format!(
                    "{} Wrote {} to `{}`.",
                    output_utils::GREEN_CHECK,
                    output_utils::pluralize(manifest.len(), "operation"),
                    output_path.display(),
                ))
            },
            None => Ok(json),
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for ManifestCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.write_manifest() {
            Ok(output) => CommandResult::stdout(format_args!("{output}")),
            Err(err) => CommandResult::from_error(err),
        }
    }
}
