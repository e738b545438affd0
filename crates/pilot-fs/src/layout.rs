//! Names of the files and directories pxe-pilot reads.
//!
//! ```text
//! <config-root>/defaults.toml
//! <config-root>/hosts/<canonical-address>.toml
//! <assets-root>/<product>/<version>/vmlinuz
//! <assets-root>/<product>/<version>/initrd
//! ```

use std::path::{Path, PathBuf};

/// Extension shared by every configuration document.
pub const DOCUMENT_EXTENSION: &str = "toml";

/// Well-known locations under the configuration root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPath {
    /// The optional `defaults.toml` document
    Defaults,
    /// The `hosts` directory holding one override per address
    HostsDir,
}

impl ConfigPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Defaults => "defaults.toml",
            Self::HostsDir => "hosts",
        }
    }

    /// Resolve against a configuration root.
    pub fn under(&self, root: &Path) -> PathBuf {
        root.join(self.as_str())
    }
}

impl AsRef<Path> for ConfigPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// File name of a host override document, relative to the hosts directory.
pub fn host_file_name(canonical: &str) -> String {
    format!("{canonical}.{DOCUMENT_EXTENSION}")
}

/// Relative source name of a host override, e.g. `hosts/aa-bb-cc-dd-ee-ff.toml`.
pub fn host_source(canonical: &str) -> String {
    format!("{}/{}", ConfigPath::HostsDir, host_file_name(canonical))
}

/// Boot artifacts that must both exist for a version to be bootable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetArtifact {
    Kernel,
    Initrd,
}

impl AssetArtifact {
    pub const ALL: [AssetArtifact; 2] = [AssetArtifact::Kernel, AssetArtifact::Initrd];

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Kernel => "vmlinuz",
            Self::Initrd => "initrd",
        }
    }
}

impl std::fmt::Display for AssetArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}
