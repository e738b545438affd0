//! Validate command implementation

use std::path::Path;

use colored::Colorize;
use pilot_core::{DocumentStore, MacAddress, Resolver, validate};

use super::require_dir;
use crate::error::{CliError, Result};

/// Outcome of validating one host.
#[derive(Debug)]
pub(crate) enum HostReport {
    Valid(MacAddress),
    Missing(MacAddress, Vec<String>),
    Failed(MacAddress, pilot_core::Error),
}

impl HostReport {
    fn is_valid(&self) -> bool {
        matches!(self, HostReport::Valid(_))
    }
}

/// Validate the merged configuration of every host override.
pub(crate) fn check_hosts(config_dir: &Path) -> Result<Vec<HostReport>> {
    let resolver = Resolver::new(DocumentStore::new(config_dir));
    let hosts = resolver.store().list_override_addresses()?;

    let reports = hosts
        .into_iter()
        .map(|mac| match resolver.resolve_mac(&mac) {
            Ok(config) => {
                let missing = validate(&config);
                if missing.is_empty() {
                    HostReport::Valid(mac)
                } else {
                    HostReport::Missing(mac, missing)
                }
            }
            Err(e) => HostReport::Failed(mac, e),
        })
        .collect();

    Ok(reports)
}

/// Run the validate command
pub fn run_validate(config_dir: &Path) -> Result<()> {
    require_dir(config_dir, "Config")?;

    let reports = check_hosts(config_dir)?;
    if reports.is_empty() {
        println!(
            "{} No host configurations found in {}",
            "!".yellow(),
            config_dir.join("hosts").display()
        );
    }

    for report in &reports {
        match report {
            HostReport::Valid(mac) => println!("{} {} valid", "✓".green(), mac),
            HostReport::Missing(mac, missing) => println!(
                "{} {} missing fields: {}",
                "✗".red(),
                mac,
                missing.join(", ")
            ),
            HostReport::Failed(mac, e) => println!("{} {} {}", "✗".red(), mac, e),
        }
    }

    let errors = reports.iter().filter(|r| !r.is_valid()).count();
    if errors > 0 {
        return Err(CliError::user(format!(
            "Validation failed with {} error(s)",
            errors
        )));
    }

    println!("{}", "All configurations valid".green());
    Ok(())
}
