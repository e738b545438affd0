//! Hardware address normalization
//!
//! Accepts `AA:BB:CC:DD:EE:FF`, `aa-bb-cc-dd-ee-ff`, `aabb.ccdd.eeff` and
//! `AABBCCDDEEFF` alike and produces the canonical `aa-bb-cc-dd-ee-ff` form
//! used as the storage key for host overrides.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

/// Separators stripped before parsing.
const SEPARATORS: [char; 3] = [':', '-', '.'];

/// A 6-byte hardware address.
///
/// `Display` yields the canonical form; ordering matches the ordering of the
/// canonical strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// The canonical textual form.
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl FromStr for MacAddress {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let invalid = || Error::InvalidAddress {
            input: input.to_string(),
        };

        let digits: Vec<u8> = input
            .trim()
            .chars()
            .filter(|c| !SEPARATORS.contains(c))
            .map(|c| c.to_digit(16).map(|d| d as u8).ok_or_else(invalid))
            .collect::<Result<_>>()?;

        if digits.len() != 12 {
            return Err(invalid());
        }

        let mut bytes = [0u8; 6];
        for (byte, pair) in bytes.iter_mut().zip(digits.chunks_exact(2)) {
            *byte = (pair[0] << 4) | pair[1];
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}-{b:02x}-{c:02x}-{d:02x}-{e:02x}-{g:02x}")
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Normalize an address string to its canonical form.
pub fn normalize(input: &str) -> Result<String> {
    input.parse::<MacAddress>().map(|mac| mac.canonical())
}
