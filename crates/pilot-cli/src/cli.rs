//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pilot_server::{DEFAULT_HOST, DEFAULT_PORT};

/// pxe-pilot - Composable PXE boot config engine for automated Proxmox installs
#[derive(Parser, Debug)]
#[command(name = "pxe-pilot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Location of the configuration tree
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ConfigDirArg {
    /// Directory holding defaults.toml and hosts/
    #[arg(short = 'c', long, env = "PXE_PILOT_CONFIG_DIR", default_value = "config")]
    pub config_dir: PathBuf,
}

/// Location of the boot assets tree
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AssetsDirArg {
    /// Directory holding <product>/<version>/ boot assets
    #[arg(short = 'a', long, env = "PXE_PILOT_ASSETS_DIR", default_value = "assets")]
    pub assets_dir: PathBuf,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        #[command(flatten)]
        config: ConfigDirArg,

        #[command(flatten)]
        assets: AssetsDirArg,

        /// Address to bind to
        #[arg(short = 'H', long, env = "PXE_PILOT_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "PXE_PILOT_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Base URL for asset links in the boot menu (default: request Host)
        #[arg(long, env = "PXE_PILOT_ASSET_URL")]
        asset_url: Option<String>,

        /// Serve best-effort answers even when required fields are missing
        #[arg(long)]
        lenient: bool,
    },

    /// Validate every host configuration
    Validate {
        #[command(flatten)]
        config: ConfigDirArg,
    },

    /// List configured host addresses
    Hosts {
        #[command(flatten)]
        config: ConfigDirArg,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the answer document for one address
    Preview {
        /// Hardware address in any common notation
        mac: String,

        #[command(flatten)]
        config: ConfigDirArg,

        /// Fail when required fields are missing
        #[arg(long)]
        strict: bool,
    },

    /// Print the iPXE boot menu for an assets tree
    Menu {
        #[command(flatten)]
        assets: AssetsDirArg,

        /// Base URL the artifacts are fetched from
        #[arg(short, long, env = "PXE_PILOT_ASSET_URL", default_value = "http://localhost:8080")]
        base_url: String,
    },
}
