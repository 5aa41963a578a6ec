//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Guild configuration not found: {0}")]
    GuildConfigNotFound(Snowflake),

    #[error("No wallet link found for member in guild")]
    LinkNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid wallet address: {0}")]
    InvalidWalletAddress(String),

    #[error("Invalid snowflake identifier: {0}")]
    InvalidSnowflake(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Discord gateway error: {0}")]
    GatewayError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::GuildConfigNotFound(_) => "UNKNOWN_GUILD",
            Self::LinkNotFound => "UNKNOWN_LINK",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidWalletAddress(_) => "INVALID_WALLET_ADDRESS",
            Self::InvalidSnowflake(_) => "INVALID_SNOWFLAKE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::GatewayError(_) => "GATEWAY_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::GuildConfigNotFound(_) | Self::LinkNotFound)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidWalletAddress(_) | Self::InvalidSnowflake(_)
        )
    }
}
