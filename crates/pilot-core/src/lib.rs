//! Configuration resolution and answer assembly for pxe-pilot
//!
//! This crate turns a hardware address into a Proxmox answer document:
//!
//! - **Address normalization**: one canonical `xx-xx-xx-xx-xx-xx` form per NIC
//! - **Document store**: `defaults.toml` plus `hosts/<address>.toml` overrides
//! - **Deep merge**: host overrides layered over the defaults
//! - **Resolution**: single-address and first-match lookups
//! - **Validation & assembly**: required-field checks and the canonical
//!   `[global]`/`[network]`/`[disk]`/`[post_installation]` layout
//!
//! # Architecture
//!
//! ```text
//!        pilot-server / pilot-cli
//!                  |
//!     request -> Resolver -> answer::assemble
//!                  |
//!        DocumentStore + merge
//!                  |
//!               pilot-fs
//! ```
//!
//! # Example
//!
//! ```ignore
//! use pilot_core::{DocumentStore, Resolver, answer};
//!
//! let resolver = Resolver::new(DocumentStore::new("/srv/pxe-pilot/config"));
//! let merged = resolver.resolve("AA:BB:CC:DD:EE:FF")?;
//! let toml = answer::assemble(&merged, true)?.to_toml()?;
//! ```

pub mod answer;
pub mod error;
pub mod mac;
pub mod merge;
pub mod request;
pub mod resolver;
pub mod store;

pub use answer::{AnswerDocument, assemble, validate};
pub use error::{Error, Result};
pub use mac::{MacAddress, normalize};
pub use merge::merge;
pub use request::AnswerRequest;
pub use resolver::{Resolution, Resolver};
pub use store::DocumentStore;

/// A configuration document: an arbitrarily nested TOML table.
pub type Document = toml::Table;
