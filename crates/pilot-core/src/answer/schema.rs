//! Required-field schema

use crate::Document;

/// Required fields per section.
pub const REQUIRED_FIELDS: &[(&str, &[&str])] = &[
    ("global", &["keyboard", "country", "timezone"]),
    ("network", &["address", "gateway"]),
    ("disk", &["filesystem", "target"]),
];

/// Satisfied by either a root-level key or `global.hostname`.
pub const HOSTNAME_FIELD: &str = "hostname";

/// Return the dotted paths of every missing required field.
///
/// An empty result means the document is valid. When a section is absent
/// (or is not a table) every field under it is reported. `hostname` is
/// checked last.
pub fn validate(config: &Document) -> Vec<String> {
    let mut missing = Vec::new();

    for (section, fields) in REQUIRED_FIELDS {
        let table = config.get(*section).and_then(|v| v.as_table());
        for field in *fields {
            if !table.is_some_and(|t| t.contains_key(*field)) {
                missing.push(format!("{section}.{field}"));
            }
        }
    }

    let in_global = config
        .get("global")
        .and_then(|v| v.as_table())
        .is_some_and(|g| g.contains_key(HOSTNAME_FIELD));
    if !config.contains_key(HOSTNAME_FIELD) && !in_global {
        missing.push(HOSTNAME_FIELD.to_string());
    }

    missing
}
