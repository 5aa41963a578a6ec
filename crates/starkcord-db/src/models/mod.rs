//! Database models (SQLx `FromRow` structs)

mod guild;
mod link;

pub use guild::GuildConfigModel;
pub use link::{LinkModel, LinkWithConfigModel};
