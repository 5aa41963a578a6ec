//! Disconnect service
//!
//! Two-step removal of a member's wallet link: an entry step that presents a
//! confirmation control, and a confirm step that tombstones the link and
//! requests removal of the synchronized role.

use tracing::{debug, info, instrument, warn};

use starkcord_core::Snowflake;

use crate::dto::{ConfirmPrompt, DisconnectConfirm, DisconnectEntry};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Disconnect flow service
pub struct DisconnectService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DisconnectService<'a> {
    /// Create a new DisconnectService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Entry step: decide between denial and the confirmation prompt.
    ///
    /// Nothing is mutated here. A missing member or guild identifier aborts
    /// silently; the caller sends no user-visible output for `Ignored`.
    #[instrument(skip(self))]
    pub async fn begin(
        &self,
        member_id: Option<Snowflake>,
        guild_id: Option<Snowflake>,
    ) -> ServiceResult<DisconnectEntry> {
        let (Some(member_id), Some(guild_id)) = (member_id, guild_id) else {
            debug!("Disconnect entry without member or guild identifier, ignoring");
            return Ok(DisconnectEntry::Ignored);
        };

        let links = self.ctx.link_repo().find_active(guild_id, member_id).await?;
        if links.is_empty() {
            return Ok(DisconnectEntry::no_link());
        }

        Ok(DisconnectEntry::Confirm(ConfirmPrompt::disconnect()))
    }

    /// Confirm step: tombstone every active link, then request role removal.
    ///
    /// Ordering is deliberate: the links are soft-removed before any role
    /// mutation is attempted, so a gateway failure cannot leave an active
    /// link behind. Role removal is best-effort; failures are logged for
    /// out-of-band reconciliation and never surface to the requester.
    #[instrument(skip(self))]
    pub async fn confirm(
        &self,
        member_id: Option<Snowflake>,
        guild_id: Option<Snowflake>,
    ) -> ServiceResult<DisconnectConfirm> {
        let (Some(member_id), Some(guild_id)) = (member_id, guild_id) else {
            debug!("Disconnect confirm without member or guild identifier, ignoring");
            return Ok(DisconnectConfirm::Ignored);
        };

        let links = self
            .ctx
            .link_repo()
            .find_active_with_config(guild_id, member_id)
            .await?;
        if links.is_empty() {
            // Raced against a prior disconnect; nothing left to do
            debug!(member_id = %member_id, guild_id = %guild_id, "No active link at confirm");
            return Ok(DisconnectConfirm::AlreadyUnlinked);
        }

        let ids: Vec<_> = links.iter().map(|(link, _)| link.id).collect();
        let removed = self.ctx.link_repo().soft_remove(&ids).await?;
        info!(member_id = %member_id, guild_id = %guild_id, removed, "Wallet link disconnected");

        for (_, config) in &links {
            if let Err(e) = self
                .ctx
                .role_gateway()
                .remove_role(guild_id, member_id, config.role_id)
                .await
            {
                warn!(
                    member_id = %member_id,
                    guild_id = %guild_id,
                    role_id = %config.role_id,
                    error = %e,
                    "Role removal failed, left for reconciliation"
                );
            }
        }

        Ok(DisconnectConfirm::disconnected(links.len()))
    }
}
