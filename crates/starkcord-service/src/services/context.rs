//! Service context - dependency container for services
//!
//! Holds the repository and gateway ports the flows depend on. The context
//! carries trait objects only, so services can be exercised against
//! in-memory implementations.

use std::sync::Arc;

use starkcord_core::traits::{
    GuildConfigRepository, GuildDirectory, LinkRepository, RoleGateway, TokenValidator,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories (links, guild configs, access tokens)
/// - Discord gateways (role mutation, guild metadata)
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    link_repo: Arc<dyn LinkRepository>,
    guild_repo: Arc<dyn GuildConfigRepository>,
    token_validator: Arc<dyn TokenValidator>,

    // Discord gateways
    role_gateway: Arc<dyn RoleGateway>,
    guild_directory: Arc<dyn GuildDirectory>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        link_repo: Arc<dyn LinkRepository>,
        guild_repo: Arc<dyn GuildConfigRepository>,
        token_validator: Arc<dyn TokenValidator>,
        role_gateway: Arc<dyn RoleGateway>,
        guild_directory: Arc<dyn GuildDirectory>,
    ) -> Self {
        Self {
            link_repo,
            guild_repo,
            token_validator,
            role_gateway,
            guild_directory,
        }
    }

    // === Repositories ===

    /// Get the wallet link repository
    pub fn link_repo(&self) -> &dyn LinkRepository {
        self.link_repo.as_ref()
    }

    /// Get the guild configuration repository
    pub fn guild_repo(&self) -> &dyn GuildConfigRepository {
        self.guild_repo.as_ref()
    }

    /// Get the analytics access-token validator
    pub fn token_validator(&self) -> &dyn TokenValidator {
        self.token_validator.as_ref()
    }

    // === Gateways ===

    /// Get the Discord role gateway
    pub fn role_gateway(&self) -> &dyn RoleGateway {
        self.role_gateway.as_ref()
    }

    /// Get the Discord guild metadata directory
    pub fn guild_directory(&self) -> &dyn GuildDirectory {
        self.guild_directory.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("gateways", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    link_repo: Option<Arc<dyn LinkRepository>>,
    guild_repo: Option<Arc<dyn GuildConfigRepository>>,
    token_validator: Option<Arc<dyn TokenValidator>>,
    role_gateway: Option<Arc<dyn RoleGateway>>,
    guild_directory: Option<Arc<dyn GuildDirectory>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            link_repo: None,
            guild_repo: None,
            token_validator: None,
            role_gateway: None,
            guild_directory: None,
        }
    }

    pub fn link_repo(mut self, repo: Arc<dyn LinkRepository>) -> Self {
        self.link_repo = Some(repo);
        self
    }

    pub fn guild_repo(mut self, repo: Arc<dyn GuildConfigRepository>) -> Self {
        self.guild_repo = Some(repo);
        self
    }

    pub fn token_validator(mut self, validator: Arc<dyn TokenValidator>) -> Self {
        self.token_validator = Some(validator);
        self
    }

    pub fn role_gateway(mut self, gateway: Arc<dyn RoleGateway>) -> Self {
        self.role_gateway = Some(gateway);
        self
    }

    pub fn guild_directory(mut self, directory: Arc<dyn GuildDirectory>) -> Self {
        self.guild_directory = Some(directory);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.link_repo
                .ok_or_else(|| super::error::ServiceError::validation("link_repo is required"))?,
            self.guild_repo
                .ok_or_else(|| super::error::ServiceError::validation("guild_repo is required"))?,
            self.token_validator.ok_or_else(|| {
                super::error::ServiceError::validation("token_validator is required")
            })?,
            self.role_gateway.ok_or_else(|| {
                super::error::ServiceError::validation("role_gateway is required")
            })?,
            self.guild_directory.ok_or_else(|| {
                super::error::ServiceError::validation("guild_directory is required")
            })?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
