//! Guild configuration database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the guild_configs table
#[derive(Debug, Clone, FromRow)]
pub struct GuildConfigModel {
    pub guild_id: i64,
    pub role_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
