use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file (when the source came from a file).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(
        file: Option<&Path>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.to_path_buf()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "<unknown>:{}:{}", self.line, self.col),
        }
    }
}

/// Where some schema definition or IR node originated.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum SourceLocation {
    /// Defined implicitly by GraphQL itself (built-in scalars, directives,
    /// and introspection types).
    GraphQLBuiltIn,
    Source(FilePosition),
}
impl SourceLocation {
    pub(crate) fn from_pos(
        file: Option<&Path>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self::Source(FilePosition::from_pos(file, pos))
    }

    pub fn file_path(&self) -> Option<&Path> {
        match self {
            Self::GraphQLBuiltIn => None,
            Self::Source(file_pos) => file_pos.file.as_deref(),
        }
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => f.write_str("<graphql built-in>"),
            Self::Source(file_pos) => file_pos.fmt(f),
        }
    }
}
