//! Error types for pilot-core

use std::path::PathBuf;

/// Result type for pilot-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pilot-core operations
///
/// Each variant is a distinct kind so the transport layer can map it to its
/// own status.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Address string is not 12 hex digits once separators are removed
    #[error("Invalid MAC address: {input}")]
    InvalidAddress { input: String },

    /// Neither a host override nor a default document exists
    #[error("No configuration found for {addresses}")]
    MissingConfiguration { addresses: String },

    /// Strict assembly found required fields missing
    #[error("Missing required fields: {}", .missing.join(", "))]
    IncompleteConfiguration { missing: Vec<String> },

    /// Caller payload is unparsable or carries no usable address
    #[error("Malformed request: {reason}")]
    MalformedRequest { reason: String },

    /// A required storage location could not be read
    #[error("Storage unavailable at {path}: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored document is not valid TOML
    #[error("Malformed document at {path}: {message}")]
    MalformedDocument { path: PathBuf, message: String },

    /// TOML serialization error
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

impl Error {
    pub fn malformed_request(reason: impl Into<String>) -> Self {
        Self::MalformedRequest {
            reason: reason.into(),
        }
    }
}

impl From<pilot_fs::Error> for Error {
    fn from(err: pilot_fs::Error) -> Self {
        match err {
            pilot_fs::Error::Io { path, source } => Self::StorageUnavailable { path, source },
            pilot_fs::Error::DocumentParse { path, message } => {
                Self::MalformedDocument { path, message }
            }
        }
    }
}
