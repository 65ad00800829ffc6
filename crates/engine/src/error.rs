use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, UncommentError>;

#[derive(Error, Debug)]
pub enum UncommentError {
    #[error("IO error at {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("{} is not valid UTF-8 text", .path.display())]
    DecodeError { path: PathBuf },

    #[error("Invalid root path: {0}")]
    InvalidPath(String),
}

impl UncommentError {
    /// Wrap an I/O failure on `path`, splitting out invalid text as a decode error.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::InvalidData {
            return Self::DecodeError { path };
        }
        Self::IoError { path, source }
    }
}
