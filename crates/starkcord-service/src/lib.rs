//! # starkcord-service
//!
//! Application layer containing the disconnect and analytics flows, the
//! service dependency container, and reply DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AnalyticsOutcome, AnalyticsReport, ConfirmPrompt, DisconnectConfirm, DisconnectEntry,
    DISCONNECT_CONFIRM_ID,
};
pub use services::{
    AnalyticsService, DisconnectService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
