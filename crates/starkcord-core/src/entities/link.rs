//! Member link entity - a Discord member's wallet connection in one guild

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{Network, Snowflake, WalletAddress};

/// Persisted association between a Discord member and a Starknet wallet,
/// scoped to one guild.
///
/// Rows are tombstoned on disconnect (`removed_at`), never hard-deleted, so
/// the historical trace survives. At most one active link may exist per
/// (guild, member) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberLink {
    pub id: Uuid,
    pub guild_id: Snowflake,
    pub member_id: Snowflake,
    pub wallet_address: WalletAddress,
    pub network: Network,
    pub linked_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub removed_at: Option<DateTime<Utc>>,
}

impl MemberLink {
    /// Create a new active link
    pub fn new(
        guild_id: Snowflake,
        member_id: Snowflake,
        wallet_address: WalletAddress,
        network: Network,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            guild_id,
            member_id,
            wallet_address,
            network,
            linked_at: now,
            updated_at: now,
            removed_at: None,
        }
    }

    /// Whether this link is still active (not tombstoned)
    #[inline]
    pub fn is_active(&self) -> bool {
        self.removed_at.is_none()
    }

    /// Tombstone the link. Idempotent: a second call keeps the original
    /// removal timestamp.
    pub fn soft_remove(&mut self) {
        if self.removed_at.is_none() {
            let now = Utc::now();
            self.removed_at = Some(now);
            self.updated_at = now;
        }
    }
}
