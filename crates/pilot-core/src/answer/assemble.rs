//! Canonical answer document assembly

use serde::Serialize;
use toml::Value;

use super::schema::{HOSTNAME_FIELD, validate};
use crate::{Document, Error, Result};

/// Content type of a serialized answer document.
pub const CONTENT_TYPE: &str = "application/toml";

/// Root-level fallbacks copied into `[global]` when it lacks them.
const GLOBAL_FALLBACK_FIELDS: [&str; 3] = ["keyboard", "country", "timezone"];

/// Credential sources in precedence order: (from global?, field name).
const CREDENTIAL_SOURCES: [(bool, &str); 4] = [
    (false, "root_password"),
    (false, "root_password_hash"),
    (true, "root_password"),
    (true, "root_password_hash"),
];

/// The answer file delivered to the installer.
///
/// Only these four sections can ever appear in the output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnswerDocument {
    pub global: Document,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<Document>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk: Option<Document>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_installation: Option<Document>,
}

impl AnswerDocument {
    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

/// Build the answer document from a merged configuration.
///
/// With `strict`, any missing required field fails the whole call with
/// `IncompleteConfiguration`. Without it a best-effort document is built.
pub fn assemble(config: &Document, strict: bool) -> Result<AnswerDocument> {
    let missing = validate(config);
    if !missing.is_empty() {
        if strict {
            return Err(Error::IncompleteConfiguration { missing });
        }
        tracing::debug!(missing = %missing.join(", "), "Assembling incomplete answer");
    }

    let source_global = table(config, "global");

    let mut global = source_global.cloned().unwrap_or_default();
    for (_, field) in CREDENTIAL_SOURCES {
        global.remove(field);
    }

    if let Some(hostname) = config.get(HOSTNAME_FIELD) {
        global.insert(HOSTNAME_FIELD.to_string(), hostname.clone());
    }

    for field in GLOBAL_FALLBACK_FIELDS {
        if let Some(value) = config.get(field) {
            global
                .entry(field.to_string())
                .or_insert_with(|| value.clone());
        }
    }

    let credential = CREDENTIAL_SOURCES.iter().find_map(|(from_global, field)| {
        let value = if *from_global {
            source_global.and_then(|g| g.get(*field))
        } else {
            config.get(*field)
        };
        value.map(|v| (*field, v.clone()))
    });
    if let Some((field, value)) = credential {
        global.insert(field.to_string(), value);
    }

    Ok(AnswerDocument {
        global,
        network: section(config, "network"),
        disk: section(config, "disk"),
        post_installation: section(config, "post_installation"),
    })
}

fn table<'a>(config: &'a Document, key: &str) -> Option<&'a Document> {
    config.get(key).and_then(Value::as_table)
}

fn section(config: &Document, key: &str) -> Option<Document> {
    match config.get(key) {
        Some(Value::Table(t)) => Some(t.clone()),
        Some(_) => {
            tracing::warn!(section = key, "Section is not a table, dropping it");
            None
        }
        None => None,
    }
}
