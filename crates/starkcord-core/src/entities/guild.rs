//! Guild configuration entity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Per-guild configuration, notably the role synchronized with an active
/// wallet link. Read-only from this core's perspective; managed by the
/// connect/setup flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildConfig {
    pub guild_id: Snowflake,
    pub role_id: Snowflake,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GuildConfig {
    pub fn new(guild_id: Snowflake, role_id: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            guild_id,
            role_id,
            created_at: now,
            updated_at: now,
        }
    }
}
