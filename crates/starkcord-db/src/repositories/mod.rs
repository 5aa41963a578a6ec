//! PostgreSQL repository implementations

mod error;
mod guild;
mod link;
mod token;

pub use guild::PgGuildConfigRepository;
pub use link::PgLinkRepository;
pub use token::PgTokenValidator;
