use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadContentError>;

pub(crate) fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadContentError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    String::from_utf8(bytes)
        .map_err(|err| ReadContentError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("`{}` is not valid UTF-8: {err}", file_path.display())]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read `{}`: {err}", file_path.display())]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("`{}` is not a file", .0.display())]
    PathIsNotAFile(PathBuf),
}
