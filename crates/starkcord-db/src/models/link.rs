//! Member link database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the member_links table
#[derive(Debug, Clone, FromRow)]
pub struct LinkModel {
    pub id: Uuid,
    pub guild_id: i64,
    pub member_id: i64,
    pub wallet_address: String,
    pub network: String,
    pub linked_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub removed_at: Option<DateTime<Utc>>,
}

impl LinkModel {
    /// Check if the link is tombstoned
    #[inline]
    pub fn is_removed(&self) -> bool {
        self.removed_at.is_some()
    }
}

/// Member link joined with its guild configuration
#[derive(Debug, Clone, FromRow)]
pub struct LinkWithConfigModel {
    pub id: Uuid,
    pub guild_id: i64,
    pub member_id: i64,
    pub wallet_address: String,
    pub network: String,
    pub linked_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub removed_at: Option<DateTime<Utc>>,
    pub role_id: i64,
    pub config_created_at: DateTime<Utc>,
    pub config_updated_at: DateTime<Utc>,
}
