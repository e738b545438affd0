//! Server settings

use std::path::PathBuf;

/// Default listen address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Settings threaded into the router at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Directory holding `defaults.toml` and `hosts/`
    pub config_dir: PathBuf,

    /// Directory holding `<product>/<version>/` boot assets
    pub assets_dir: PathBuf,

    pub host: String,
    pub port: u16,

    /// Base URL for menu artifact links; the request's Host header when unset
    pub asset_url: Option<String>,

    /// Reject incomplete answers from `POST /answer`
    pub strict: bool,
}

impl ServerConfig {
    pub fn new(config_dir: impl Into<PathBuf>, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            assets_dir: assets_dir.into(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            asset_url: None,
            strict: true,
        }
    }

    pub fn with_bind(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    pub fn with_asset_url(mut self, url: impl Into<String>) -> Self {
        self.asset_url = Some(url.into());
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// `host:port` for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Base URL for menu links when no Host header is available.
    pub fn fallback_base_url(&self) -> String {
        format!("http://{}", self.bind_address())
    }
}
