//! Read access to the configuration directory
//!
//! ```text
//! <config-root>/defaults.toml             (optional)
//! <config-root>/hosts/<address>.toml      (one per host, optional)
//! ```
//!
//! Every call reads the filesystem again; there is no cache.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use pilot_fs::io::{self, EntryKind};
use pilot_fs::layout::{self, DOCUMENT_EXTENSION};
use pilot_fs::{ConfigPath, DocumentLoader};

use crate::{Document, MacAddress, Result};

/// Document store rooted at a configuration directory.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
    loader: DocumentLoader,
}

impl DocumentStore {
    /// Create a store for the given configuration root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            loader: DocumentLoader::new(),
        }
    }

    /// The configuration root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn defaults_path(&self) -> PathBuf {
        ConfigPath::Defaults.under(&self.root)
    }

    fn hosts_dir(&self) -> PathBuf {
        ConfigPath::HostsDir.under(&self.root)
    }

    fn override_path(&self, mac: &MacAddress) -> PathBuf {
        self.hosts_dir()
            .join(layout::host_file_name(&mac.canonical()))
    }

    /// Whether a default document is present.
    pub fn default_exists(&self) -> bool {
        self.defaults_path().is_file()
    }

    /// Load the default document, or `None` when it is absent.
    pub fn read_default(&self) -> Result<Option<Document>> {
        Ok(self.loader.load_optional(&self.defaults_path())?)
    }

    /// Load the default document; an absent file is an empty document.
    pub fn load_default(&self) -> Result<Document> {
        Ok(self.read_default()?.unwrap_or_default())
    }

    /// Load the override for a canonical address, if one exists.
    pub fn load_override(&self, mac: &MacAddress) -> Result<Option<Document>> {
        Ok(self.loader.load_optional(&self.override_path(mac))?)
    }

    /// Canonical addresses that have an override document, in order.
    ///
    /// Only `*.toml` files whose stem is already a canonical address count;
    /// anything else in `hosts/` is ignored.
    pub fn list_override_addresses(&self) -> Result<BTreeSet<MacAddress>> {
        let hosts_dir = self.hosts_dir();
        let mut addresses = BTreeSet::new();

        for entry in io::list_dir(&hosts_dir)? {
            if entry.kind != EntryKind::File {
                continue;
            }
            let Some(stem) = entry
                .name
                .strip_suffix(DOCUMENT_EXTENSION)
                .and_then(|s| s.strip_suffix('.'))
            else {
                continue;
            };
            match stem.parse::<MacAddress>() {
                Ok(mac) if mac.canonical() == stem => {
                    addresses.insert(mac);
                }
                _ => {
                    tracing::debug!(file = %entry.name, "Ignoring non-canonical host file");
                }
            }
        }

        Ok(addresses)
    }

    /// Relative source name of the default document.
    pub fn default_source(&self) -> &'static str {
        ConfigPath::Defaults.as_str()
    }

    /// Relative source name of an address's override document.
    pub fn override_source(&self, mac: &MacAddress) -> String {
        layout::host_source(&mac.canonical())
    }
}
