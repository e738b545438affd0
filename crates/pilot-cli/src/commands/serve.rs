//! Serve command implementation

use pilot_server::ServerConfig;

use super::require_dir;
use crate::error::Result;

/// Run the HTTP server until interrupted
pub fn run_serve(config: ServerConfig) -> Result<()> {
    require_dir(&config.config_dir, "Config")?;
    if !config.assets_dir.is_dir() {
        tracing::warn!(
            assets_dir = %config.assets_dir.display(),
            "Assets directory missing, boot menu will be empty"
        );
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(pilot_server::run(config))?;
    Ok(())
}
