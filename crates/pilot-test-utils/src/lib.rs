//! Shared test fixtures for the pxe-pilot workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Example
//!
//! ```rust,no_run
//! use pilot_test_utils::TestRoot;
//!
//! let root = TestRoot::new();
//! root.write_defaults("[global]\nkeyboard = \"en-us\"\n");
//! root.write_host("aa-bb-cc-dd-ee-ff", "hostname = \"node1\"\n");
//! root.add_bootable("proxmox-ve", "9.1-1");
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A complete answer configuration that passes validation.
pub const COMPLETE_DEFAULTS: &str = r#"
[global]
keyboard = "en-us"
country = "us"
timezone = "UTC"
root_password = "changeme"

[network]
source = "from-answer"
address = "10.0.0.10/24"
gateway = "10.0.0.1"
dns = "10.0.0.1"

[disk]
filesystem = "zfs"
target = "/dev/sda"
"#;

/// A temporary directory holding a `config/` tree and an `assets/` tree.
pub struct TestRoot {
    temp_dir: TempDir,
}

impl Default for TestRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRoot {
    /// Create `config/hosts/` and `assets/` under a fresh temporary directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("config").join("hosts")).unwrap();
        fs::create_dir_all(temp_dir.path().join("assets")).unwrap();
        Self { temp_dir }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root().join("config")
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.root().join("assets")
    }

    /// Write `config/defaults.toml`.
    pub fn write_defaults(&self, content: &str) {
        fs::write(self.config_dir().join("defaults.toml"), content).unwrap();
    }

    /// Write `config/hosts/<name>.toml`.
    pub fn write_host(&self, name: &str, content: &str) {
        fs::write(
            self.config_dir().join("hosts").join(format!("{name}.toml")),
            content,
        )
        .unwrap();
    }

    /// Write an arbitrary file under `config/hosts/`.
    pub fn write_hosts_file(&self, file_name: &str, content: &str) {
        fs::write(self.config_dir().join("hosts").join(file_name), content).unwrap();
    }

    /// Create `assets/<product>/<version>/` containing only the given files.
    pub fn add_version(&self, product: &str, version: &str, files: &[&str]) -> PathBuf {
        let dir = self.assets_dir().join(product).join(version);
        fs::create_dir_all(&dir).unwrap();
        for file in files {
            fs::write(dir.join(file), *file).unwrap();
        }
        dir
    }

    /// Create a version directory with both `vmlinuz` and `initrd`.
    pub fn add_bootable(&self, product: &str, version: &str) -> PathBuf {
        self.add_version(product, version, &["vmlinuz", "initrd"])
    }
}
