//! Flow outcome DTOs
//!
//! Outcomes carry the user-facing reply content; the API layer only decides
//! how to encode them on the wire.

use serde::Serialize;
use starkcord_core::NetworkDistribution;

/// Fixed correlation identifier for the disconnect confirmation control.
///
/// The pending confirmation has no persisted session state; it exists only
/// as this opaque id on the interactive component, and the confirming
/// interaction is re-validated from storage.
pub const DISCONNECT_CONFIRM_ID: &str = "disconnect-confirm";

/// Confirmation control presented before a disconnect is applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmPrompt {
    pub content: String,
    pub action_id: &'static str,
    pub button_label: String,
}

impl ConfirmPrompt {
    pub fn disconnect() -> Self {
        Self {
            content: "Do you really want to disconnect from your Starknet wallet? \
                      You will lose your Starknet-related role."
                .to_string(),
            action_id: DISCONNECT_CONFIRM_ID,
            button_label: "Disconnect".to_string(),
        }
    }
}

/// Outcome of the disconnect command (entry step)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisconnectEntry {
    /// Missing member or guild identifier; no user-visible output
    Ignored,
    /// No active link; ephemeral, non-destructive denial
    NoLink { content: String },
    /// Active link found; present the confirmation control
    Confirm(ConfirmPrompt),
}

impl DisconnectEntry {
    pub fn no_link() -> Self {
        Self::NoLink {
            content: "You haven't linked any Starknet wallet to this Discord server.".to_string(),
        }
    }
}

/// Outcome of the disconnect confirmation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisconnectConfirm {
    /// Missing member or guild identifier; no user-visible output
    Ignored,
    /// Raced against a prior disconnect; idempotent no-op, no output
    AlreadyUnlinked,
    /// Links tombstoned and role removal requested; terminal acknowledgment
    Disconnected { content: String, revoked: usize },
}

impl DisconnectConfirm {
    pub fn disconnected(revoked: usize) -> Self {
        Self::Disconnected {
            content: "Disconnected!".to_string(),
            revoked,
        }
    }
}

/// Aggregate analytics for one guild
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsReport {
    pub guild_name: String,
    pub distribution: NetworkDistribution,
}

/// Outcome of the analytics access flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsOutcome {
    /// Token invalid or expired; guild existence is not revealed
    TokenExpired,
    /// Valid token but no server record for the guild
    GuildNotFound,
    /// Access granted
    Report(AnalyticsReport),
}
