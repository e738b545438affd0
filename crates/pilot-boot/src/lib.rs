//! Boot asset discovery and iPXE menu rendering
//!
//! Scans an assets tree for bootable image sets and renders them into an
//! iPXE menu script.
//!
//! ```text
//! <assets-root>/<product>/<version>/vmlinuz
//! <assets-root>/<product>/<version>/initrd
//! ```
//!
//! # Example
//!
//! ```no_run
//! use pilot_boot::{MenuConfig, MenuRenderer, scan};
//!
//! let catalog = scan("/srv/pxe-pilot/assets").unwrap();
//! let renderer = MenuRenderer::new(MenuConfig::new("http://192.168.1.1:8080"));
//! let script = renderer.render(&catalog);
//!
//! assert!(script.starts_with("#!ipxe"));
//! ```

pub mod catalog;
pub mod error;
pub mod menu;
pub mod version;

pub use catalog::{Catalog, VersionEntry, scan};
pub use error::{BootError, Result};
pub use menu::{DEFAULT_KERNEL_PARAMS, MenuConfig, MenuRenderer, chain_script, product_name};
pub use version::VersionKey;
