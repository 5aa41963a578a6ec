//! Starknet network label
//!
//! Network labels arrive with arbitrary casing ("Starknet", "STARKNET-MAINNET").
//! They are normalized to lower case on construction and only capitalized for
//! display, so counting and equality are always case-insensitive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wallet network label, stored lower-cased
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Network(String);

impl Network {
    /// Create a network label, normalizing to lower case
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(label.as_ref().trim().to_lowercase())
    }

    /// The normalized (lower-cased) label
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form: first character upper-cased, rest untouched.
    /// Formatting only; the stored label stays normalized.
    pub fn display_label(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Network {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Network {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}
