//! Starknet wallet address
//!
//! Addresses are field elements transported as 0x-prefixed hex strings.
//! Validation here is structural only (prefix, hex digits, length bound);
//! on-chain existence is not this crate's concern.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum hex digits in a Starknet field element (251 bits)
const MAX_HEX_LEN: usize = 64;

/// Validated Starknet wallet address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Parse and validate an address string
    pub fn parse(s: &str) -> Result<Self, WalletAddressError> {
        let hex = s
            .strip_prefix("0x")
            .ok_or(WalletAddressError::MissingPrefix)?;

        if hex.is_empty() || hex.len() > MAX_HEX_LEN {
            return Err(WalletAddressError::InvalidLength(hex.len()));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(WalletAddressError::InvalidHex);
        }

        Ok(Self(format!("0x{}", hex.to_lowercase())))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error when parsing a wallet address
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WalletAddressError {
    #[error("wallet address must start with 0x")]
    MissingPrefix,

    #[error("wallet address has invalid length: {0} hex digits")]
    InvalidLength(usize),

    #[error("wallet address contains non-hex characters")]
    InvalidHex,
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for WalletAddress {
    type Err = WalletAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WalletAddress::parse(s)
    }
}
