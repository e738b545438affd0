//! Configuration resolution for hardware addresses
//!
//! The `Resolver` layers a host override over the default document:
//! 1. Default document (`defaults.toml`), empty when absent
//! 2. Host override (`hosts/<address>.toml`), skipped when absent
//!
//! No validation happens here; see [`crate::answer`].

use crate::merge::merge;
use crate::{Document, DocumentStore, Error, MacAddress, Result};

/// Outcome of a first-match resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The merged configuration document
    pub document: Document,

    /// The address whose override was applied, `None` for the default document
    pub matched: Option<MacAddress>,
}

impl Resolution {
    /// Relative name of the file the resolution was built from.
    pub fn source(&self, store: &DocumentStore) -> String {
        match &self.matched {
            Some(mac) => store.override_source(mac),
            None => store.default_source().to_string(),
        }
    }
}

/// Resolves merged configuration documents from a [`DocumentStore`].
#[derive(Debug, Clone)]
pub struct Resolver {
    store: DocumentStore,
}

impl Resolver {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// The underlying document store.
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Resolve the merged configuration for one address.
    ///
    /// Returns the default document unchanged when the address has no
    /// override. An empty document is a valid result.
    pub fn resolve(&self, address: &str) -> Result<Document> {
        let mac: MacAddress = address.parse()?;
        self.resolve_mac(&mac)
    }

    /// Resolve the merged configuration for an already-normalized address.
    pub fn resolve_mac(&self, mac: &MacAddress) -> Result<Document> {
        let defaults = self.store.load_default()?;

        match self.store.load_override(mac)? {
            Some(host) => {
                tracing::debug!(%mac, "Merging host override over defaults");
                Ok(merge(&defaults, &host))
            }
            None => {
                tracing::debug!(%mac, "No host override, using defaults");
                Ok(defaults)
            }
        }
    }

    /// Resolve against the first address in `addresses` that has an override.
    ///
    /// Addresses are tried in the order given. Malformed entries are skipped;
    /// if every entry is malformed the first `InvalidAddress` is returned.
    /// Without any matching override the default document is used, and when
    /// that is absent too the result is `MissingConfiguration`.
    pub fn resolve_first_match<S: AsRef<str>>(&self, addresses: &[S]) -> Result<Resolution> {
        if addresses.is_empty() {
            return Err(Error::malformed_request("no addresses supplied"));
        }

        let mut first_invalid = None;
        let mut valid = Vec::with_capacity(addresses.len());
        for address in addresses {
            match address.as_ref().parse::<MacAddress>() {
                Ok(mac) => valid.push(mac),
                Err(e) => {
                    tracing::warn!(address = address.as_ref(), "Skipping malformed address");
                    first_invalid.get_or_insert(e);
                }
            }
        }

        if valid.is_empty() {
            if let Some(err) = first_invalid {
                return Err(err);
            }
        }

        let defaults = self.store.read_default()?;

        for mac in &valid {
            if let Some(host) = self.store.load_override(mac)? {
                tracing::info!(%mac, "Matched host override");
                let base = defaults.clone().unwrap_or_default();
                return Ok(Resolution {
                    document: merge(&base, &host),
                    matched: Some(*mac),
                });
            }
        }

        match defaults {
            Some(document) => {
                tracing::info!(addresses = %join(&valid), "No host match, serving defaults");
                Ok(Resolution {
                    document,
                    matched: None,
                })
            }
            None => {
                tracing::warn!(addresses = %join(&valid), "No host match and no defaults");
                Err(Error::MissingConfiguration {
                    addresses: join(&valid),
                })
            }
        }
    }
}

fn join(macs: &[MacAddress]) -> String {
    macs.iter()
        .map(MacAddress::canonical)
        .collect::<Vec<_>>()
        .join(", ")
}
