//! Terraform-facing adapters over the Admin API client
//!
//! A [`Provider`] is configured once per plugin invocation and hands out
//! resources and data sources that borrow its client.

pub mod data_sources;
mod diagnostics;
mod resource;

mod api_key;
mod invite;
mod workspace;
mod workspace_member;

use log::{debug, info};

use crate::admin::{AdminClient, SettingsResolver};
use crate::config::provider;
use crate::error::AdminError;

pub use api_key::{ApiKeyResource, ApiKeyState};
pub use data_sources::{
    ApiKeyDataSource, ApiKeyModel, ApiKeysDataSource, ApiKeysModel, WorkspaceDataSource,
    WorkspaceModel, WorkspacesDataSource, WorkspacesModel,
};
pub use diagnostics::{Diagnostic, CLIENT_ERROR};
pub use invite::{InviteResource, InviteState};
pub use resource::{
    DataSource, DataSourceKind, DeletePolicy, ImportPolicy, Resource, ResourceKind, UpdatePolicy,
};
pub use workspace::{WorkspaceResource, WorkspaceState};
pub use workspace_member::{
    member_id, parse_member_id, WorkspaceMemberResource, WorkspaceMemberState,
};

/// Provider block as written by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    pub admin_key: Option<String>,
    pub base_url: Option<String>,
}

/// A configured provider instance
#[derive(Debug)]
pub struct Provider {
    client: AdminClient,
}

impl Provider {
    /// Configure from the provider block, falling back to the process environment
    pub fn configure(config: &ProviderConfig) -> Result<Self, Diagnostic> {
        Self::configure_with(config, &SettingsResolver::from_env())
    }

    /// Configure with a custom settings resolver
    pub fn configure_with<F>(
        config: &ProviderConfig,
        resolver: &SettingsResolver<F>,
    ) -> Result<Self, Diagnostic>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = resolver
            .resolve(config.admin_key.as_deref(), config.base_url.as_deref())
            .map_err(|e| match e {
                AdminError::Config(detail) => Diagnostic::error("Missing Admin Key", detail),
                other => Diagnostic::error("Provider Configuration Error", other.to_string()),
            })?;

        info!("Configuring {} provider for {}", provider::TYPE_NAME, settings.base_url);
        let client = AdminClient::new(settings.admin_key, settings.base_url)
            .map_err(|e| Diagnostic::error("Provider Configuration Error", e.to_string()))?;
        Ok(Self::from_client(client))
    }

    /// Wrap an already constructed client
    pub fn from_client(client: AdminClient) -> Self {
        debug!("Provider ready (api version {})", client.api_version());
        Self { client }
    }

    pub fn client(&self) -> &AdminClient {
        &self.client
    }

    pub fn type_name(&self) -> &'static str {
        provider::TYPE_NAME
    }

    pub fn resource_types(&self) -> Vec<&'static str> {
        ResourceKind::ALL.iter().map(|k| k.type_name()).collect()
    }

    pub fn data_source_types(&self) -> Vec<&'static str> {
        DataSourceKind::ALL.iter().map(|k| k.type_name()).collect()
    }

    pub fn workspace(&self) -> WorkspaceResource<'_> {
        WorkspaceResource::new(&self.client)
    }

    pub fn api_key(&self) -> ApiKeyResource<'_> {
        ApiKeyResource::new(&self.client)
    }

    pub fn workspace_member(&self) -> WorkspaceMemberResource<'_> {
        WorkspaceMemberResource::new(&self.client)
    }

    pub fn invite(&self) -> InviteResource<'_> {
        InviteResource::new(&self.client)
    }

    pub fn workspace_data_source(&self) -> WorkspaceDataSource<'_> {
        WorkspaceDataSource::new(&self.client)
    }

    pub fn workspaces_data_source(&self) -> WorkspacesDataSource<'_> {
        WorkspacesDataSource::new(&self.client)
    }

    pub fn api_key_data_source(&self) -> ApiKeyDataSource<'_> {
        ApiKeyDataSource::new(&self.client)
    }

    pub fn api_keys_data_source(&self) -> ApiKeysDataSource<'_> {
        ApiKeysDataSource::new(&self.client)
    }
}
