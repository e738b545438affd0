//! Preview command implementation

use std::path::Path;

use pilot_core::{DocumentStore, Resolver, assemble};

use super::require_dir;
use crate::error::Result;

/// Render the answer document for one address.
pub(crate) fn render_preview(config_dir: &Path, mac: &str, strict: bool) -> Result<(String, String)> {
    let resolver = Resolver::new(DocumentStore::new(config_dir));
    let resolution = resolver.resolve_first_match(&[mac])?;
    let source = resolution.source(resolver.store());
    let document = assemble(&resolution.document, strict)?.to_toml()?;
    Ok((source, document))
}

/// Run the preview command
pub fn run_preview(config_dir: &Path, mac: &str, strict: bool) -> Result<()> {
    require_dir(config_dir, "Config")?;

    let (source, document) = render_preview(config_dir, mac, strict)?;
    tracing::info!(source = %source, "Resolved answer");
    print!("{}", document);
    Ok(())
}
