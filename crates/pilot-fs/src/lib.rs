//! Filesystem layer for pxe-pilot
//!
//! Knows where documents and boot assets live on disk and how to read them.
//! Everything here is read-only; nothing is cached between calls.

pub mod document;
pub mod error;
pub mod io;
pub mod layout;

pub use document::DocumentLoader;
pub use error::{Error, Result};
pub use layout::{AssetArtifact, ConfigPath};
