//! PostgreSQL implementation of LinkRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use starkcord_core::entities::{GuildConfig, MemberLink};
use starkcord_core::traits::{LinkRepository, RepoResult};
use starkcord_core::value_objects::Snowflake;

use crate::mappers::split_link_with_config;
use crate::models::{LinkModel, LinkWithConfigModel};

use super::error::map_db_error;

/// PostgreSQL implementation of LinkRepository
#[derive(Clone)]
pub struct PgLinkRepository {
    pool: PgPool,
}

impl PgLinkRepository {
    /// Create a new PgLinkRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    #[instrument(skip(self))]
    async fn find_active(
        &self,
        guild_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Vec<MemberLink>> {
        let results = sqlx::query_as::<_, LinkModel>(
            r"
            SELECT id, guild_id, member_id, wallet_address, network,
                   linked_at, updated_at, removed_at
            FROM member_links
            WHERE guild_id = $1 AND member_id = $2 AND removed_at IS NULL
            ORDER BY linked_at
            ",
        )
        .bind(guild_id.into_inner())
        .bind(member_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(MemberLink::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_active_with_config(
        &self,
        guild_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Vec<(MemberLink, GuildConfig)>> {
        let results = sqlx::query_as::<_, LinkWithConfigModel>(
            r"
            SELECT l.id, l.guild_id, l.member_id, l.wallet_address, l.network,
                   l.linked_at, l.updated_at, l.removed_at,
                   c.role_id,
                   c.created_at AS config_created_at,
                   c.updated_at AS config_updated_at
            FROM member_links l
            JOIN guild_configs c ON c.guild_id = l.guild_id
            WHERE l.guild_id = $1 AND l.member_id = $2 AND l.removed_at IS NULL
            ORDER BY l.linked_at
            ",
        )
        .bind(guild_id.into_inner())
        .bind(member_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(split_link_with_config).collect()
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn soft_remove(&self, ids: &[Uuid]) -> RepoResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        // Guarded on removed_at IS NULL so a raced duplicate confirmation
        // affects zero rows instead of rewriting the tombstone timestamp.
        let result = sqlx::query(
            r"
            UPDATE member_links
            SET removed_at = NOW(), updated_at = NOW()
            WHERE id = ANY($1) AND removed_at IS NULL
            ",
        )
        .bind(ids)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn find_by_guild(&self, guild_id: Snowflake) -> RepoResult<Vec<MemberLink>> {
        // No lifecycle filter: the analytics aggregate counts every stored
        // row, tombstoned or not.
        let results = sqlx::query_as::<_, LinkModel>(
            r"
            SELECT id, guild_id, member_id, wallet_address, network,
                   linked_at, updated_at, removed_at
            FROM member_links
            WHERE guild_id = $1
            ORDER BY linked_at
            ",
        )
        .bind(guild_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(MemberLink::try_from).collect()
    }
}
