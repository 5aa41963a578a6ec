//! Ports - repository and gateway traits
//!
//! The domain layer defines what it needs; the infrastructure crates
//! (starkcord-db, starkcord-discord) provide the implementations.

mod gateways;
mod repositories;

pub use gateways::{GuildDirectory, GuildProfile, RoleGateway};
pub use repositories::{GuildConfigRepository, LinkRepository, RepoResult, TokenValidator};
