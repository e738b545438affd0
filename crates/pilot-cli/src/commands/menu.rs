//! Menu command implementation

use std::path::Path;

use pilot_boot::{MenuConfig, MenuRenderer, scan};

use crate::error::Result;

/// Run the menu command
pub fn run_menu(assets_dir: &Path, base_url: &str) -> Result<()> {
    let catalog = scan(assets_dir)?;
    tracing::debug!(products = catalog.len(), "Scanned assets");

    let script = MenuRenderer::new(MenuConfig::new(base_url)).render(&catalog);
    print!("{}", script);
    Ok(())
}
