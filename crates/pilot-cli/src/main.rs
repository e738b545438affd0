//! pxe-pilot CLI
//!
//! Serves Proxmox answer documents and iPXE boot menus, and inspects the
//! configuration tree offline.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use pilot_server::ServerConfig;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;
    tracing::debug!("Verbose mode enabled");

    execute_command(cli.command)
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Serve {
            config,
            assets,
            host,
            port,
            asset_url,
            lenient,
        } => {
            let mut server = ServerConfig::new(config.config_dir, assets.assets_dir)
                .with_bind(host, port)
                .with_strict(!lenient);
            if let Some(url) = asset_url {
                server = server.with_asset_url(url);
            }
            commands::run_serve(server)
        }
        Commands::Validate { config } => commands::run_validate(&config.config_dir),
        Commands::Hosts { config, json } => commands::run_hosts(&config.config_dir, json),
        Commands::Preview {
            mac,
            config,
            strict,
        } => commands::run_preview(&config.config_dir, &mac, strict),
        Commands::Menu { assets, base_url } => commands::run_menu(&assets.assets_dir, &base_url),
    }
}
