//! Discord interaction webhook handler
//!
//! Receives interaction payloads (slash commands and message components)
//! and dispatches the disconnect flow. Replies are Discord interaction
//! response JSON; the transport always requires a response, so silent
//! aborts become a contentless acknowledgment.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use starkcord_core::Snowflake;
use starkcord_service::{
    ConfirmPrompt, DisconnectConfirm, DisconnectEntry, DisconnectService, DISCONNECT_CONFIRM_ID,
};

use crate::response::ApiResult;
use crate::state::AppState;

// Interaction request types (Discord wire values)
const INTERACTION_PING: u8 = 1;
const INTERACTION_APPLICATION_COMMAND: u8 = 2;
const INTERACTION_MESSAGE_COMPONENT: u8 = 3;

// Interaction callback types
const CALLBACK_PONG: u8 = 1;
const CALLBACK_CHANNEL_MESSAGE: u8 = 4;
const CALLBACK_DEFERRED_MESSAGE: u8 = 5;
const CALLBACK_DEFERRED_UPDATE: u8 = 6;
const CALLBACK_UPDATE_MESSAGE: u8 = 7;

// Message flags
const FLAG_EPHEMERAL: u32 = 64;

// Component types and styles
const COMPONENT_ACTION_ROW: u8 = 1;
const COMPONENT_BUTTON: u8 = 2;
const BUTTON_STYLE_PRIMARY: u8 = 1;

/// Incoming interaction payload (the fields this webhook consumes)
#[derive(Debug, Deserialize)]
pub struct InteractionRequest {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub data: Option<InteractionData>,
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
    #[serde(default)]
    pub member: Option<InteractionMember>,
}

#[derive(Debug, Deserialize)]
pub struct InteractionData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub custom_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InteractionMember {
    #[serde(default)]
    pub user: Option<InteractionUser>,
}

#[derive(Debug, Deserialize)]
pub struct InteractionUser {
    pub id: Snowflake,
}

impl InteractionRequest {
    fn member_id(&self) -> Option<Snowflake> {
        self.member.as_ref().and_then(|m| m.user.as_ref()).map(|u| u.id)
    }
}

/// Outgoing interaction response
#[derive(Debug, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<CallbackData>,
}

#[derive(Debug, Serialize)]
struct CallbackData {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    flags: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    components: Option<Vec<ActionRow>>,
}

#[derive(Debug, Serialize)]
struct ActionRow {
    #[serde(rename = "type")]
    kind: u8,
    components: Vec<Button>,
}

#[derive(Debug, Serialize)]
struct Button {
    #[serde(rename = "type")]
    kind: u8,
    style: u8,
    label: String,
    custom_id: String,
}

impl InteractionResponse {
    fn pong() -> Self {
        Self {
            kind: CALLBACK_PONG,
            data: None,
        }
    }

    /// Contentless acknowledgment for a component interaction with no
    /// user-visible outcome. Valid only for components; the prior message
    /// is left untouched.
    fn ack_component() -> Self {
        Self {
            kind: CALLBACK_DEFERRED_UPDATE,
            data: None,
        }
    }

    /// Contentless acknowledgment for a command interaction. Commands may
    /// not use the deferred-update callback, so the silent path defers an
    /// ephemeral message that is never followed up.
    fn ack_command() -> Self {
        Self {
            kind: CALLBACK_DEFERRED_MESSAGE,
            data: Some(CallbackData {
                content: None,
                flags: Some(FLAG_EPHEMERAL),
                components: None,
            }),
        }
    }

    fn ephemeral_message(content: String) -> Self {
        Self {
            kind: CALLBACK_CHANNEL_MESSAGE,
            data: Some(CallbackData {
                content: Some(content),
                flags: Some(FLAG_EPHEMERAL),
                components: None,
            }),
        }
    }

    fn confirm_prompt(prompt: ConfirmPrompt) -> Self {
        let row = ActionRow {
            kind: COMPONENT_ACTION_ROW,
            components: vec![Button {
                kind: COMPONENT_BUTTON,
                style: BUTTON_STYLE_PRIMARY,
                label: prompt.button_label,
                custom_id: prompt.action_id.to_string(),
            }],
        };
        Self {
            kind: CALLBACK_CHANNEL_MESSAGE,
            data: Some(CallbackData {
                content: Some(prompt.content),
                flags: Some(FLAG_EPHEMERAL),
                components: Some(vec![row]),
            }),
        }
    }

    /// Replace the confirmation message, clearing its button
    fn update_message(content: String) -> Self {
        Self {
            kind: CALLBACK_UPDATE_MESSAGE,
            data: Some(CallbackData {
                content: Some(content),
                flags: None,
                components: Some(Vec::new()),
            }),
        }
    }
}

/// Discord interaction webhook
///
/// POST /api/interactions
pub async fn handle_interaction(
    State(state): State<AppState>,
    Json(request): Json<InteractionRequest>,
) -> ApiResult<Json<InteractionResponse>> {
    if request.kind == INTERACTION_PING {
        return Ok(Json(InteractionResponse::pong()));
    }

    let member_id = request.member_id();
    let guild_id = request.guild_id;
    let service = DisconnectService::new(state.service_context());

    let response = match request.kind {
        INTERACTION_APPLICATION_COMMAND
            if request.data.as_ref().and_then(|d| d.name.as_deref()) == Some("disconnect") =>
        {
            match service.begin(member_id, guild_id).await? {
                DisconnectEntry::Ignored => InteractionResponse::ack_command(),
                DisconnectEntry::NoLink { content } => {
                    InteractionResponse::ephemeral_message(content)
                }
                DisconnectEntry::Confirm(prompt) => InteractionResponse::confirm_prompt(prompt),
            }
        }
        INTERACTION_MESSAGE_COMPONENT
            if request.data.as_ref().and_then(|d| d.custom_id.as_deref())
                == Some(DISCONNECT_CONFIRM_ID) =>
        {
            match service.confirm(member_id, guild_id).await? {
                DisconnectConfirm::Ignored | DisconnectConfirm::AlreadyUnlinked => {
                    InteractionResponse::ack_component()
                }
                DisconnectConfirm::Disconnected { content, .. } => {
                    InteractionResponse::update_message(content)
                }
            }
        }
        kind => {
            debug!(kind, "Unhandled interaction");
            InteractionResponse::ack_command()
        }
    };

    Ok(Json(response))
}
