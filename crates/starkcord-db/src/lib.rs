//! # starkcord-db
//!
//! Database layer implementing the core repository traits with PostgreSQL
//! via SQLx. Handles connection pool management, `FromRow` models,
//! entity/model mappers, and repository implementations.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{PgGuildConfigRepository, PgLinkRepository, PgTokenValidator};
