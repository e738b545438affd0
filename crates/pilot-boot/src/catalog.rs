//! Asset catalog discovery
//!
//! Products are the immediate subdirectories of the assets root, versions
//! the immediate subdirectories of each product. A version is bootable only
//! when both `vmlinuz` and `initrd` sit directly inside it. Names containing
//! whitespace cannot form menu labels and are skipped.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use pilot_fs::AssetArtifact;
use pilot_fs::io::{self, EntryKind};
use serde::Serialize;

use crate::error::{BootError, Result};
use crate::version::VersionKey;

/// One bootable version of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionEntry {
    pub product: String,
    pub version: String,
    pub kernel: PathBuf,
    pub initrd: PathBuf,
}

impl VersionEntry {
    /// Menu item identifier, unique across the catalog.
    pub fn target_id(&self) -> String {
        format!("{}-{}", self.product, self.version)
    }

    /// URL path of an artifact relative to the server root.
    pub fn artifact_path(&self, artifact: AssetArtifact) -> String {
        format!(
            "assets/{}/{}/{}",
            self.product,
            self.version,
            artifact.file_name()
        )
    }
}

/// Bootable image sets grouped by product.
///
/// Products iterate in ascending identifier order; versions within a product
/// are newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: BTreeMap<String, Vec<VersionEntry>>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Products and their versions in catalog order.
    pub fn products(&self) -> impl Iterator<Item = (&str, &[VersionEntry])> {
        self.products
            .iter()
            .map(|(id, versions)| (id.as_str(), versions.as_slice()))
    }

    /// Versions of one product, newest first.
    pub fn versions(&self, product: &str) -> Option<&[VersionEntry]> {
        self.products.get(product).map(Vec::as_slice)
    }

    /// Every version entry in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = &VersionEntry> {
        self.products.values().flatten()
    }
}

/// Scan an assets root into a fresh catalog.
///
/// A missing root yields an empty catalog. Two entries that would share a
/// `{product}-{version}` identifier fail the scan.
pub fn scan(root: impl AsRef<Path>) -> Result<Catalog> {
    let root = root.as_ref();
    let mut products = BTreeMap::new();
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    for product in io::list_dir(root)? {
        if product.kind != EntryKind::Dir {
            continue;
        }
        if !is_label_safe(&product.name) {
            tracing::warn!(path = ?product.path, "Skipping product with whitespace in its name");
            continue;
        }

        let mut versions = Vec::new();
        for version in io::list_dir(&product.path)? {
            if version.kind != EntryKind::Dir {
                continue;
            }
            if !is_label_safe(&version.name) {
                tracing::warn!(path = ?version.path, "Skipping version with whitespace in its name");
                continue;
            }
            let complete = AssetArtifact::ALL
                .iter()
                .all(|artifact| version.path.join(artifact.file_name()).is_file());
            if !complete {
                tracing::debug!(path = ?version.path, "Skipping incomplete version");
                continue;
            }
            let kernel = version.path.join(AssetArtifact::Kernel.file_name());
            let initrd = version.path.join(AssetArtifact::Initrd.file_name());
            versions.push(VersionEntry {
                product: product.name.clone(),
                version: version.name,
                kernel,
                initrd,
            });
        }

        if versions.is_empty() {
            tracing::debug!(product = %product.name, "No bootable versions");
            continue;
        }

        // Stable: equal keys keep discovery order
        versions.sort_by_cached_key(|v| std::cmp::Reverse(VersionKey::parse(&v.version)));

        for entry in &versions {
            let id = entry.target_id();
            let dir = product.path.join(&entry.version);
            if let Some(first) = seen.insert(id.clone(), dir.clone()) {
                return Err(BootError::DuplicateTarget {
                    id,
                    first,
                    second: dir,
                });
            }
        }

        tracing::debug!(product = %product.name, count = versions.len(), "Discovered product");
        products.insert(product.name, versions);
    }

    Ok(Catalog { products })
}

/// Whether a directory name can appear in an `item` or `goto` label.
fn is_label_safe(name: &str) -> bool {
    !name.chars().any(char::is_whitespace)
}
