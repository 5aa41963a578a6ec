//! Analytics service
//!
//! Token-gated aggregation of the wallet-network distribution for one guild.

use tracing::{debug, instrument};

use starkcord_core::{NetworkDistribution, Snowflake};

use crate::dto::{AnalyticsOutcome, AnalyticsReport};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Analytics access flow service
pub struct AnalyticsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AnalyticsService<'a> {
    /// Create a new AnalyticsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate access and build the distribution report for a guild.
    ///
    /// The token is checked before anything else. An invalid or expired
    /// token short-circuits with `TokenExpired` and makes no further
    /// lookups, so the response does not reveal whether the guild exists.
    ///
    /// The aggregation scans every stored link row for the guild, removed
    /// rows included.
    #[instrument(skip(self, token))]
    pub async fn report(&self, guild_id: Snowflake, token: &str) -> ServiceResult<AnalyticsOutcome> {
        if !self.ctx.token_validator().is_valid(guild_id, token).await? {
            debug!(guild_id = %guild_id, "Analytics token rejected");
            return Ok(AnalyticsOutcome::TokenExpired);
        }

        if self.ctx.guild_repo().find_by_guild(guild_id).await?.is_none() {
            return Ok(AnalyticsOutcome::GuildNotFound);
        }

        let profile = self.ctx.guild_directory().guild_profile(guild_id).await?;
        let links = self.ctx.link_repo().find_by_guild(guild_id).await?;
        let distribution = NetworkDistribution::from_links(&links);

        Ok(AnalyticsOutcome::Report(AnalyticsReport {
            guild_name: profile.name,
            distribution,
        }))
    }
}
