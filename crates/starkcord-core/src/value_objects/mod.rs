//! Value objects - immutable domain values with validation

mod network;
mod snowflake;
mod wallet;

pub use network::Network;
pub use snowflake::{Snowflake, SnowflakeParseError};
pub use wallet::{WalletAddress, WalletAddressError};
