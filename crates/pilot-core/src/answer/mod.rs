//! Proxmox answer file validation and assembly
//!
//! A merged configuration is checked against the required-field schema and
//! reshaped into the answer layout the Proxmox installer expects:
//!
//! ```toml
//! [global]            # keyboard, country, timezone, hostname, credentials
//! [network]           # copied verbatim
//! [disk]              # copied verbatim
//! [post_installation] # optional, copied verbatim
//! ```

mod assemble;
mod schema;

pub use assemble::{AnswerDocument, CONTENT_TYPE, assemble};
pub use schema::{HOSTNAME_FIELD, REQUIRED_FIELDS, validate};
