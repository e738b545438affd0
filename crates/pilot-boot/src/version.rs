//! Numeric version ordering
//!
//! `9.1-1` becomes `[9, 1, 1]`; non-numeric tokens such as `rc` are
//! dropped, and missing trailing components compare as zero. Tokens are
//! kept as digit strings so arbitrarily wide numbers still compare as
//! integers.

use std::cmp::Ordering;

/// Sort key for a version directory name.
#[derive(Debug, Clone)]
pub struct VersionKey(Vec<String>);

impl VersionKey {
    pub fn parse(version: &str) -> Self {
        let tokens = version
            .split(['.', '-'])
            .filter(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
            .map(|token| token.trim_start_matches('0').to_string())
            .collect();
        Self(tokens)
    }

    /// Numeric components without leading zeros; zero is the empty string.
    pub fn components(&self) -> &[String] {
        &self.0
    }
}

/// Integer comparison of two digit strings without leading zeros.
fn cmp_digits(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for VersionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.0.len().max(other.0.len());
        (0..len)
            .map(|i| {
                let a = self.0.get(i).map_or("", String::as_str);
                let b = other.0.get(i).map_or("", String::as_str);
                cmp_digits(a, b)
            })
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialEq for VersionKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionKey {}

impl PartialOrd for VersionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
