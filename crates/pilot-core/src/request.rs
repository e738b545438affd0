//! Answer request payload parsing
//!
//! The installer posts a JSON document describing the machine. Three shapes
//! carry the hardware address, checked in this order:
//!
//! 1. `network_interfaces: [{ "mac": ... }, ...]`
//! 2. `interfaces: [{ "mac": ... }, ...]` (older installers)
//! 3. a top-level `mac` string, only when neither list has entries

use serde::Deserialize;

use crate::{Error, Result};

/// One network interface as reported by the installer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterfaceDescriptor {
    #[serde(default)]
    pub mac: Option<String>,
}

/// The request body of `POST /answer`.
///
/// Unknown fields are ignored; the installer sends a lot of hardware detail
/// that pxe-pilot has no use for.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub network_interfaces: Option<Vec<InterfaceDescriptor>>,

    #[serde(default)]
    pub interfaces: Option<Vec<InterfaceDescriptor>>,

    #[serde(default)]
    pub mac: Option<String>,
}

impl AnswerRequest {
    /// Parse a request body.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::malformed_request("missing request body"));
        }
        serde_json::from_slice(body)
            .map_err(|e| Error::malformed_request(format!("invalid JSON: {e}")))
    }

    /// Candidate addresses in the order the installer listed them.
    ///
    /// Fails with `MalformedRequest` when no shape yields an address.
    pub fn addresses(&self) -> Result<Vec<String>> {
        let interfaces = [&self.network_interfaces, &self.interfaces]
            .into_iter()
            .flatten()
            .find(|list| !list.is_empty());

        let addresses: Vec<String> = match interfaces {
            Some(list) => list
                .iter()
                .filter_map(|iface| iface.mac.as_deref())
                .filter(|mac| !mac.trim().is_empty())
                .map(str::to_string)
                .collect(),
            None => self
                .mac
                .iter()
                .filter(|mac| !mac.trim().is_empty())
                .cloned()
                .collect(),
        };

        if addresses.is_empty() {
            return Err(Error::malformed_request("no MAC address found in request"));
        }
        Ok(addresses)
    }
}
