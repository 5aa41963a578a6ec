//! Domain entities - core business objects

mod distribution;
mod guild;
mod link;

pub use distribution::NetworkDistribution;
pub use guild::GuildConfig;
pub use link::MemberLink;
