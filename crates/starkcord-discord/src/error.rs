//! Discord REST error types

use starkcord_core::DomainError;

/// Errors from the Discord REST API
#[derive(Debug, thiserror::Error)]
pub enum DiscordApiError {
    #[error("Discord request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Discord returned {status} for {endpoint}")]
    Status { status: u16, endpoint: String },

    #[error("Unexpected Discord response body: {0}")]
    Decode(String),
}

impl DiscordApiError {
    /// Whether the failure is a 404 (unknown guild/member/role)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

impl From<DiscordApiError> for DomainError {
    fn from(err: DiscordApiError) -> Self {
        DomainError::GatewayError(err.to_string())
    }
}
