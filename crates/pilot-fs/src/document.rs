//! TOML document loading

use std::path::Path;

use crate::{Error, Result, io};

/// Loads configuration documents as untyped TOML tables.
///
/// No schema is applied here; callers decide what the keys mean.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentLoader;

impl DocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse TOML text into a table, attributing errors to `path`.
    pub fn parse(&self, path: &Path, content: &str) -> Result<toml::Table> {
        content.parse::<toml::Table>().map_err(|e| Error::DocumentParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load a document that must exist.
    pub fn load(&self, path: &Path) -> Result<toml::Table> {
        let content = io::read_text(path)?;
        self.parse(path, &content)
    }

    /// Load a document that may be absent.
    pub fn load_optional(&self, path: &Path) -> Result<Option<toml::Table>> {
        match io::read_optional_text(path)? {
            Some(content) => {
                tracing::debug!(?path, "Loaded document");
                self.parse(path, &content).map(Some)
            }
            None => {
                tracing::debug!(?path, "Document absent");
                Ok(None)
            }
        }
    }
}
