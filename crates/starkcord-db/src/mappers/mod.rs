//! Entity <-> model mappers

mod guild;
mod link;

pub use link::split_link_with_config;
