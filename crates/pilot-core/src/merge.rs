//! Deep merge of configuration documents

use toml::Value;

use crate::Document;

/// Merge `overlay` over `base`, returning a new document.
///
/// For a key present in both where both values are tables, the tables are
/// merged recursively. Any other value in `overlay` replaces the base value
/// wholesale, arrays included. Neither input is modified.
pub fn merge(base: &Document, overlay: &Document) -> Document {
    let mut result = base.clone();

    for (key, overlay_value) in overlay {
        let merged = match (result.get(key), overlay_value) {
            (Some(Value::Table(base_table)), Value::Table(overlay_table)) => {
                Value::Table(merge(base_table, overlay_table))
            }
            _ => overlay_value.clone(),
        };
        result.insert(key.clone(), merged);
    }

    result
}
