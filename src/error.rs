//! Error types for directory queries

use std::path::PathBuf;

/// Broad classification of a [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad caller input: unknown category, empty extension, unsupported mode
    InvalidArgument,
    /// Anything the filesystem reported while reading the base path or walking it
    Filesystem,
}

/// Error type for directory query operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown file type: {name}. Valid types: {}", .valid.join(", "))]
    UnknownCategory { name: String, valid: Vec<&'static str> },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownCategory { .. } | Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::Io { .. } | Error::Walk(_) => ErrorKind::Filesystem,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for directory query operations
pub type Result<T> = std::result::Result<T, Error>;
