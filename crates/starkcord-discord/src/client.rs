//! Discord REST client
//!
//! Thin wrapper over the Discord v10 HTTP API covering only the operations
//! the core ports require: removing a guild member's role and fetching guild
//! display metadata. Authenticated with a bot token.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use starkcord_core::traits::{GuildDirectory, GuildProfile, RoleGateway};
use starkcord_core::{DomainError, Snowflake};

use crate::error::DiscordApiError;

const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Discord REST client implementing the core gateway ports
#[derive(Debug, Clone)]
pub struct DiscordRestClient {
    http: reqwest::Client,
    token: String,
    api_base: String,
}

/// Wire shape of GET /guilds/{guild_id}
#[derive(Debug, Deserialize)]
struct GuildResponse {
    id: Snowflake,
    name: String,
    icon: Option<String>,
}

impl DiscordRestClient {
    /// Create a client authenticated with the given bot token
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self::with_api_base(bot_token, DEFAULT_API_BASE)
    }

    /// Create a client against a non-default API base (used in tests)
    pub fn with_api_base(bot_token: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: bot_token.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    fn auth_header(&self) -> String {
        format!("Bot {}", self.token)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base, endpoint)
    }
}

#[async_trait]
impl RoleGateway for DiscordRestClient {
    #[instrument(skip(self))]
    async fn remove_role(
        &self,
        guild_id: Snowflake,
        member_id: Snowflake,
        role_id: Snowflake,
    ) -> Result<(), DomainError> {
        let endpoint = format!("/guilds/{guild_id}/members/{member_id}/roles/{role_id}");
        let response = self
            .http
            .delete(self.url(&endpoint))
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(DiscordApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DiscordApiError::Status {
                status: status.as_u16(),
                endpoint,
            }
            .into());
        }

        debug!(%guild_id, %member_id, %role_id, "Role removed");
        Ok(())
    }
}

#[async_trait]
impl GuildDirectory for DiscordRestClient {
    #[instrument(skip(self))]
    async fn guild_profile(&self, guild_id: Snowflake) -> Result<GuildProfile, DomainError> {
        let endpoint = format!("/guilds/{guild_id}");
        let response = self
            .http
            .get(self.url(&endpoint))
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(DiscordApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DiscordApiError::Status {
                status: status.as_u16(),
                endpoint,
            }
            .into());
        }

        let guild: GuildResponse = response
            .json()
            .await
            .map_err(|e| DiscordApiError::Decode(e.to_string()))?;

        Ok(GuildProfile {
            id: guild.id,
            name: guild.name,
            icon: guild.icon,
        })
    }
}
