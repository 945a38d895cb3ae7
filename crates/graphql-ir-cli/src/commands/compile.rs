use crate::commands;
use crate::input_files::InputFileArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_ir::merge::FieldMerger;
use graphql_ir::operation::CompiledDocument;
use graphql_ir::operation::SelectionScope;
use graphql_ir::schema::Schema;
use graphql_ir::typecase::TypeCaseOptions;
use graphql_ir::typecase::TypeCasePartitioner;
use std::fmt::Write;
use std::path::PathBuf;

const INDENT: &str = "  ";

#[derive(Debug, clap::Args)]
pub(crate) struct CompileCmd {
    #[arg(
        help="Keep fragment spreads opaque instead of merging their fields \
             into each type-case variant.",
        long,
    )]
    pub(crate) no_merge_fragment_spreads: bool,

    #[arg(
        help="Path to a GraphQL schema file. May be repeated.",
        long,
        required=true,
    )]
    pub(crate) schema: Vec<PathBuf>,

    #[command(flatten)]
    pub(crate) inputs: InputFileArgs,
}
impl CompileCmd {
    fn options(&self) -> TypeCaseOptions {
        TypeCaseOptions {
            merge_in_fragment_spreads: !self.no_merge_fragment_spreads,
        }
    }

    fn summarize(&self) -> anyhow::Result<String> {
        let schema = commands::load_schema(&self.schema)?;
        let compiled = commands::compile_inputs(&schema, &self.schema, &self.inputs)?;
        for fragment in compiled.unused_fragments() {
            log::warn!(
                "Fragment `{}` is never spread by any operation.",
                fragment.name(),
            );
        }

        let summarizer = Summarizer {
            compiled: &compiled,
            options: self.options(),
            schema: &schema,
        };
        let mut out = String::new();
        for operation in compiled.operations() {
            let identity = operation.identity(compiled.fragments());
            writeln!(
                out,
                "{} {} ({})",
                operation.kind().keyword(),
                operation.name(),
                identity.id,
            )?;
            summarizer.write_scope(&mut out, operation.selection_set(), 1)?;
        }
        write!(
            out,
            "{} Compiled {} and {}.",
            output_utils::GREEN_CHECK,
            output_utils::pluralize(compiled.operations().len(), "operation"),
            output_utils::pluralize(compiled.fragments().len(), "fragment"),
        )?;
        Ok(out)
    }
}

#[inherent::inherent]
impl RunnableCommand for CompileCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.summarize() {
            Ok(summary) => CommandResult::stdout(format_args!("{summary}")),
            Err(err) => CommandResult::from_error(err),
        }
    }
}

struct Summarizer<'a> {
    compiled: &'a CompiledDocument,
    options: TypeCaseOptions,
    schema: &'a Schema,
}
impl Summarizer<'_> {
    /// One line per exhaustive variant of `scope`, listing the merged
    /// response keys (conditional ones suffixed with `?`), followed by the
    /// nested summary of each composite field.
    fn write_scope(
        &self,
        out: &mut String,
        scope: &impl SelectionScope,
        depth: usize,
    ) -> anyhow::Result<()> {
        let fragments = self.compiled.fragments();
        let type_case = TypeCasePartitioner::new(fragments)
            .with_options(self.options)
            .partition(scope)?;
        let merger = FieldMerger::new(self.schema, fragments)
            .with_options(self.options);

        let indent = INDENT.repeat(depth);
        for variant in type_case.exhaustive_variants() {
            let type_names: Vec<&str> = self.schema
                .possible_type_names(variant.possible_types())
                .collect();
            let merged_fields = merger.merge_fields(&variant)?;
            let field_keys: Vec<String> = merged_fields.iter()
                .map(|merged| {
                    if merged.is_conditional() {
                        format!("{}?", merged.response_key())
                    } else {
                        merged.response_key().to_string()
                    }
                })
                .collect();
            writeln!(
                out,
                "{indent}[{}] {}",
                type_names.join("|"),
                field_keys.join(", "),
            )?;

            for merged in &merged_fields {
                if let Some(selection_set) = merged.field().selection_set() {
                    writeln!(out, "{indent}{INDENT}{}:", merged.response_key())?;
                    self.write_scope(out, selection_set, depth + 2)?;
                }
            }
        }
        Ok(())
    }
}
