//! MemberLink entity <-> model mapper

use starkcord_core::entities::{GuildConfig, MemberLink};
use starkcord_core::error::DomainError;
use starkcord_core::value_objects::{Network, Snowflake, WalletAddress};

use crate::models::{LinkModel, LinkWithConfigModel};

/// Convert LinkModel to MemberLink entity.
///
/// Fallible: a stored wallet address that no longer parses indicates row
/// corruption and surfaces as a domain error instead of panicking.
impl TryFrom<LinkModel> for MemberLink {
    type Error = DomainError;

    fn try_from(model: LinkModel) -> Result<Self, Self::Error> {
        let wallet_address = WalletAddress::parse(&model.wallet_address)
            .map_err(|e| DomainError::InvalidWalletAddress(e.to_string()))?;

        Ok(MemberLink {
            id: model.id,
            guild_id: Snowflake::new(model.guild_id),
            member_id: Snowflake::new(model.member_id),
            wallet_address,
            network: Network::new(model.network),
            linked_at: model.linked_at,
            updated_at: model.updated_at,
            removed_at: model.removed_at,
        })
    }
}

/// Split a joined row into the link entity and its guild configuration
pub fn split_link_with_config(
    model: LinkWithConfigModel,
) -> Result<(MemberLink, GuildConfig), DomainError> {
    let config = GuildConfig {
        guild_id: Snowflake::new(model.guild_id),
        role_id: Snowflake::new(model.role_id),
        created_at: model.config_created_at,
        updated_at: model.config_updated_at,
    };

    let link = MemberLink::try_from(LinkModel {
        id: model.id,
        guild_id: model.guild_id,
        member_id: model.member_id,
        wallet_address: model.wallet_address,
        network: model.network,
        linked_at: model.linked_at,
        updated_at: model.updated_at,
        removed_at: model.removed_at,
    })?;

    Ok((link, config))
}
