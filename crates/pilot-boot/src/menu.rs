//! iPXE menu script rendering
//!
//! One gap item per product, one selectable item per version, an exit item,
//! then a boot target block per version:
//!
//! ```text
//! :proxmox-ve-9.1-1
//! kernel <base>/assets/proxmox-ve/9.1-1/vmlinuz <params>
//! initrd <base>/assets/proxmox-ve/9.1-1/initrd
//! boot || goto start
//! ```

use pilot_fs::AssetArtifact;

use crate::catalog::{Catalog, VersionEntry};

/// Kernel command line for the Proxmox installer in automated mode.
pub const DEFAULT_KERNEL_PARAMS: &str = "vga=791 video=vesafb:ywrap,mtrr ramdisk_size=16777216 rw quiet splash=silent proxmox-start-auto-installer";

/// Label of the menu start, targeted when a boot fails.
const START_LABEL: &str = "start";

/// Label of the exit-to-shell target.
const SHELL_LABEL: &str = "shell";

/// Display names for well-known products.
const PRODUCT_NAMES: &[(&str, &str)] = &[
    ("proxmox-ve", "Proxmox VE"),
    ("proxmox-bs", "Proxmox BS"),
    ("proxmox-mg", "Proxmox MG"),
    ("proxmox-dc", "Proxmox DC"),
];

/// Human-readable name of a product, falling back to its identifier.
pub fn product_name(product: &str) -> &str {
    PRODUCT_NAMES
        .iter()
        .find(|(id, _)| *id == product)
        .map(|(_, name)| *name)
        .unwrap_or(product)
}

/// Configuration for menu rendering
#[derive(Debug, Clone)]
pub struct MenuConfig {
    /// URL the artifacts are fetched from (e.g., http://192.168.1.1:8080)
    pub base_url: String,

    /// Menu title line
    pub title: String,
}

impl MenuConfig {
    /// Create a new config with base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            title: "PXE Pilot Boot Menu".to_string(),
        }
    }

    /// Set the menu title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Renders a [`Catalog`] into an iPXE menu script
#[derive(Debug, Clone)]
pub struct MenuRenderer {
    config: MenuConfig,
}

impl MenuRenderer {
    pub fn new(config: MenuConfig) -> Self {
        Self { config }
    }

    /// Render the menu script for a catalog.
    pub fn render(&self, catalog: &Catalog) -> String {
        if catalog.is_empty() {
            return self.render_placeholder();
        }

        let mut script = String::from("#!ipxe\n\n");
        script.push_str(&format!(":{START_LABEL}\n"));
        script.push_str(&format!("menu {}\n", self.config.title));

        for (product, versions) in catalog.products() {
            script.push_str(&format!("item --gap -- {}\n", product_name(product)));
            for entry in versions {
                script.push_str(&format!(
                    "item {} {} {}\n",
                    entry.target_id(),
                    entry.product,
                    entry.version
                ));
            }
        }

        let default_target = catalog
            .entries()
            .next()
            .map(VersionEntry::target_id)
            .unwrap_or_else(|| SHELL_LABEL.to_string());

        script.push_str("item --gap --\n");
        script.push_str(&format!("item {SHELL_LABEL} Exit to iPXE shell\n"));
        script.push_str(&format!(
            "choose --default {default_target} target && goto ${{target}} || goto {SHELL_LABEL}\n"
        ));

        for entry in catalog.entries() {
            script.push('\n');
            script.push_str(&self.boot_block(entry));
        }

        script.push('\n');
        script.push_str(&shell_block());
        script
    }

    /// Menu offered when no assets were found.
    fn render_placeholder(&self) -> String {
        let mut script = String::from("#!ipxe\n\n");
        script.push_str(&format!(":{START_LABEL}\n"));
        script.push_str(&format!("menu {}\n", self.config.title));
        script.push_str("item --gap -- No boot assets found\n");
        script.push_str(&format!("item {SHELL_LABEL} Exit to iPXE shell\n"));
        script.push_str(&format!(
            "choose --default {SHELL_LABEL} target && goto ${{target}} || goto {SHELL_LABEL}\n"
        ));
        script.push('\n');
        script.push_str(&shell_block());
        script
    }

    fn boot_block(&self, entry: &VersionEntry) -> String {
        format!(
            ":{id}\nkernel {kernel} {params}\ninitrd {initrd}\nboot || goto {START_LABEL}\n",
            id = entry.target_id(),
            kernel = self.artifact_url(entry, AssetArtifact::Kernel),
            params = DEFAULT_KERNEL_PARAMS,
            initrd = self.artifact_url(entry, AssetArtifact::Initrd),
        )
    }

    fn artifact_url(&self, entry: &VersionEntry, artifact: AssetArtifact) -> String {
        format!("{}/{}", self.config.base_url, entry.artifact_path(artifact))
    }
}

fn shell_block() -> String {
    format!(":{SHELL_LABEL}\nshell\n")
}

/// Chain stub served to the bootloader first; it loads the menu.
pub fn chain_script() -> String {
    "#!ipxe\n\nchain /menu.ipxe\n".to_string()
}
