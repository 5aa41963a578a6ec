//! Service layer - application flows built on the core ports

pub mod analytics;
pub mod context;
pub mod disconnect;
pub mod error;

pub use analytics::AnalyticsService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use disconnect::DisconnectService;
pub use error::{ServiceError, ServiceResult};
