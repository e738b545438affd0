//! Read-only I/O helpers

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Kind of a directory entry, as far as the callers here care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Other,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read text content from a file that is allowed to be absent.
///
/// Returns `Ok(None)` when the file does not exist. Any other failure
/// (permissions, the path being a directory, invalid UTF-8) is an error.
pub fn read_optional_text(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// List the entries of a directory, sorted by file name.
///
/// A missing directory yields an empty listing. Entries whose names are
/// not valid UTF-8 are skipped. Symlinks are followed when classifying.
pub fn list_dir(path: &Path) -> Result<Vec<DirEntry>> {
    let read_dir = match fs::read_dir(path) {
        Ok(rd) => rd,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(?path, "Directory does not exist, treating as empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(Error::io(path, e)),
    };

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| Error::io(path, e))?;
        let Ok(name) = entry.file_name().into_string() else {
            tracing::debug!(path = ?entry.path(), "Skipping non UTF-8 entry");
            continue;
        };
        let entry_path = entry.path();
        let kind = match fs::metadata(&entry_path) {
            Ok(meta) if meta.is_file() => EntryKind::File,
            Ok(meta) if meta.is_dir() => EntryKind::Dir,
            // Dangling symlinks and special files
            _ => EntryKind::Other,
        };
        entries.push(DirEntry {
            name,
            path: entry_path,
            kind,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
