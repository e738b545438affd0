//! Command implementations

mod hosts;
mod menu;
mod preview;
mod serve;
mod validate;

use std::path::Path;

use crate::error::{CliError, Result};

pub use hosts::run_hosts;
pub use menu::run_menu;
pub use preview::run_preview;
pub use serve::run_serve;
pub use validate::run_validate;

/// Fail early when the configuration tree is absent.
fn require_dir(path: &Path, what: &str) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "{} directory does not exist: {}",
            what,
            path.display()
        )))
    }
}
