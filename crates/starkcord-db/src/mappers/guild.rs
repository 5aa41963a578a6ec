//! GuildConfig entity <-> model mapper

use starkcord_core::entities::GuildConfig;
use starkcord_core::value_objects::Snowflake;

use crate::models::GuildConfigModel;

impl From<GuildConfigModel> for GuildConfig {
    fn from(model: GuildConfigModel) -> Self {
        GuildConfig {
            guild_id: Snowflake::new(model.guild_id),
            role_id: Snowflake::new(model.role_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
