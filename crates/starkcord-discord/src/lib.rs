//! # starkcord-discord
//!
//! Discord REST adapter implementing the core gateway ports (`RoleGateway`,
//! `GuildDirectory`) against the Discord v10 HTTP API via `reqwest`.

mod client;
mod error;

pub use client::DiscordRestClient;
pub use error::DiscordApiError;
