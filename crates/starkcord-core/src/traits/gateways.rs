//! Gateway traits (ports) - external Discord collaborators

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Live guild display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildProfile {
    pub id: Snowflake,
    pub name: String,
    pub icon: Option<String>,
}

/// Role mutation on a Discord guild member.
///
/// Best-effort from the core's perspective: callers treat failures as
/// observable (logged) but never gate user-facing success on them.
#[async_trait]
pub trait RoleGateway: Send + Sync {
    async fn remove_role(
        &self,
        guild_id: Snowflake,
        member_id: Snowflake,
        role_id: Snowflake,
    ) -> Result<(), DomainError>;
}

/// Live guild metadata lookup
#[async_trait]
pub trait GuildDirectory: Send + Sync {
    async fn guild_profile(&self, guild_id: Snowflake) -> Result<GuildProfile, DomainError>;
}
