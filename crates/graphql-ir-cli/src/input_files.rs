use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Positional file/directory arguments shared by every command that reads
/// executable documents.
#[derive(Debug, clap::Args)]
pub(crate) struct InputFileArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL operations and fragments.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub file_or_dir_paths: Vec<PathBuf>,
}
impl InputFileArgs {
    /// Find every GraphQL file at or under each input path, skipping any
    /// path in `exclude` (typically the schema files).
    pub fn collect_file_paths(&self, exclude: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
        let graphql_file_exts = normalize_exts(&self.graphql_file_exts);
        let exclude: HashSet<PathBuf> = exclude.iter()
            .filter_map(|path| std::fs::canonicalize(path).ok())
            .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| format!(
                    "Failed to scan `{}`",
                    path.display(),
                ))?;
                let path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                    continue;
                }
                if !has_graphql_ext(path, &graphql_file_exts) {
                    log::trace!("Skipping non-graphql file: {path:#?}.");
                    continue;
                }

                let canonical_path = std::fs::canonicalize(path)
                    .with_context(|| format!("Failed to resolve `{}`", path.display()))?;
                if exclude.contains(&canonical_path) {
                    log::trace!("Skipping schema file: {canonical_path:#?}.");
                    continue;
                }
                if !file_paths.contains(&canonical_path) {
                    file_paths.push(canonical_path);
                }
            }
        }

        // A single file named explicitly is loaded regardless of its
        // extension.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            let canonical_path = std::fs::canonicalize(first_arg_path)
                .with_context(|| format!("Failed to resolve `{}`", first_arg_path.display()))?;
            log::warn!(
                "Proceeding to compile {canonical_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(canonical_path);
        }

        log::debug!("Found {} GraphQL files.", file_paths.len());
        Ok(file_paths)
    }
}

/// Extensions as `Path::extension()` reports them: no leading dot.
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

fn has_graphql_ext(path: &Path, graphql_file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| graphql_file_exts.contains(ext.to_string_lossy().as_ref()))
        .unwrap_or(false)
}
