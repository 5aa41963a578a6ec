//! Repository traits (ports) - define the interface for data access

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{GuildConfig, MemberLink};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Link Repository
// ============================================================================

#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Active (non-tombstoned) links for a member in a guild.
    ///
    /// Returned as a collection: the schema invariant allows at most one
    /// active row per (guild, member), but callers must process every row
    /// a loose query returns.
    async fn find_active(
        &self,
        guild_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Vec<MemberLink>>;

    /// Active links joined with their guild configuration, so each link is
    /// handled together with the role it granted
    async fn find_active_with_config(
        &self,
        guild_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Vec<(MemberLink, GuildConfig)>>;

    /// Tombstone the given links, returning the number of rows actually
    /// transitioned. Idempotent: already-removed rows are left untouched.
    async fn soft_remove(&self, ids: &[Uuid]) -> RepoResult<u64>;

    /// Every stored link row for a guild, tombstoned rows included.
    /// Lifecycle filtering is deliberately left to the caller.
    async fn find_by_guild(&self, guild_id: Snowflake) -> RepoResult<Vec<MemberLink>>;
}

// ============================================================================
// Guild Config Repository
// ============================================================================

#[async_trait]
pub trait GuildConfigRepository: Send + Sync {
    /// Find the configuration for a guild
    async fn find_by_guild(&self, guild_id: Snowflake) -> RepoResult<Option<GuildConfig>>;
}

// ============================================================================
// Token Validator
// ============================================================================

/// Read-only check of an externally issued analytics access token.
/// This core never mutates token state.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Whether the token exists for the guild and has not expired
    async fn is_valid(&self, guild_id: Snowflake, token: &str) -> RepoResult<bool>;
}
