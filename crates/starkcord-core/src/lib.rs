//! # starkcord-core
//!
//! Domain layer containing entities, value objects, ports (repository and
//! gateway traits), and domain errors. This crate has zero dependencies on
//! infrastructure (database, web framework, Discord REST, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{GuildConfig, MemberLink, NetworkDistribution};
pub use error::DomainError;
pub use traits::{
    GuildConfigRepository, GuildDirectory, GuildProfile, LinkRepository, RepoResult, RoleGateway,
    TokenValidator,
};
pub use value_objects::{Network, Snowflake, SnowflakeParseError, WalletAddress};
