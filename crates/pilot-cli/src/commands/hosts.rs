//! Hosts command implementation

use std::path::Path;

use colored::Colorize;
use pilot_core::{DocumentStore, MacAddress};
use serde::Serialize;

use super::require_dir;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct HostsReport<'a> {
    config_dir: String,
    default_exists: bool,
    host_count: usize,
    hosts: &'a [MacAddress],
}

/// Run the hosts command
pub fn run_hosts(config_dir: &Path, json: bool) -> Result<()> {
    require_dir(config_dir, "Config")?;

    let store = DocumentStore::new(config_dir);
    let hosts: Vec<_> = store.list_override_addresses()?.into_iter().collect();

    if json {
        let report = HostsReport {
            config_dir: config_dir.display().to_string(),
            default_exists: store.default_exists(),
            host_count: hosts.len(),
            hosts: &hosts,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let defaults = if store.default_exists() {
        store.default_source().green()
    } else {
        "none".dimmed()
    };
    println!("{}: {}", "Defaults".dimmed(), defaults);
    println!();

    println!("{} ({}):", "Hosts".bold(), hosts.len());
    if hosts.is_empty() {
        println!("  {}", "None".dimmed());
    }
    for mac in &hosts {
        println!("  {} {}", "+".green(), mac.to_string().cyan());
    }

    Ok(())
}
