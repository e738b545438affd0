//! Error types for boot asset discovery

use std::path::PathBuf;

use thiserror::Error;

/// Error type for catalog and menu operations
#[derive(Debug, Error)]
pub enum BootError {
    /// The assets tree exists but could not be read
    #[error("asset storage unavailable at {path}: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two products produced the same `{product}-{version}` menu target
    #[error("duplicate boot target {id}: {first} and {second}")]
    DuplicateTarget {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Result type for boot operations
pub type Result<T> = std::result::Result<T, BootError>;

impl From<pilot_fs::Error> for BootError {
    fn from(err: pilot_fs::Error) -> Self {
        match err {
            pilot_fs::Error::Io { path, source } => Self::StorageUnavailable { path, source },
            // The scanner never parses documents
            pilot_fs::Error::DocumentParse { path, message } => Self::StorageUnavailable {
                path,
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, message),
            },
        }
    }
}
