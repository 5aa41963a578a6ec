//! PostgreSQL implementation of GuildConfigRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use starkcord_core::entities::GuildConfig;
use starkcord_core::traits::{GuildConfigRepository, RepoResult};
use starkcord_core::value_objects::Snowflake;

use crate::models::GuildConfigModel;

use super::error::map_db_error;

/// PostgreSQL implementation of GuildConfigRepository
#[derive(Clone)]
pub struct PgGuildConfigRepository {
    pool: PgPool,
}

impl PgGuildConfigRepository {
    /// Create a new PgGuildConfigRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuildConfigRepository for PgGuildConfigRepository {
    #[instrument(skip(self))]
    async fn find_by_guild(&self, guild_id: Snowflake) -> RepoResult<Option<GuildConfig>> {
        let result = sqlx::query_as::<_, GuildConfigModel>(
            r"
            SELECT guild_id, role_id, created_at, updated_at
            FROM guild_configs
            WHERE guild_id = $1
            ",
        )
        .bind(guild_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(GuildConfig::from))
    }
}
