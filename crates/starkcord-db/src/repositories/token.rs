//! PostgreSQL implementation of TokenValidator
//!
//! Tokens are issued elsewhere; this side only evaluates them. The check is
//! read-only and deliberately leaks nothing beyond a boolean.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use starkcord_core::traits::{RepoResult, TokenValidator};
use starkcord_core::value_objects::Snowflake;

use super::error::map_db_error;

/// PostgreSQL implementation of TokenValidator
#[derive(Clone)]
pub struct PgTokenValidator {
    pool: PgPool,
}

impl PgTokenValidator {
    /// Create a new PgTokenValidator
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenValidator for PgTokenValidator {
    #[instrument(skip(self, token))]
    async fn is_valid(&self, guild_id: Snowflake, token: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM access_tokens
                WHERE guild_id = $1 AND token = $2 AND expires_at > NOW()
            )
            ",
        )
        .bind(guild_id.into_inner())
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
