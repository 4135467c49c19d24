//! Anthropic provider - manage Anthropic organizations as infrastructure
//!
//! Core of a Terraform provider for the Anthropic Admin API: an
//! authenticated HTTP client, typed operations per entity, and lifecycle
//! adapters that map declarative resources onto those operations.
//!
//! # Features
//!
//! - Workspaces (archived on destroy)
//! - API keys (archived via status update; secret kept from create only)
//! - Workspace memberships, imported as `workspace_id/user_id`
//! - Organization invites (create/delete only)
//! - Data sources that drain cursor pagination
//!
//! # Example
//!
//! ```no_run
//! use anthropic_provider::{Provider, ProviderConfig, Resource, WorkspaceState};
//!
//! # async fn run() -> Result<(), anthropic_provider::Diagnostic> {
//! let provider = Provider::configure(&ProviderConfig::default())?;
//! let plan = WorkspaceState {
//!     name: "Production".to_string(),
//!     ..WorkspaceState::default()
//! };
//! let state = provider.workspace().create(&plan).await?;
//! println!("created {:?}", state.id);
//! # Ok(())
//! # }
//! ```

pub mod admin;
pub mod config;
pub mod error;
pub mod provider;

pub use admin::{AdminClient, ListParams, ListResponse, SettingsResolver};
pub use error::{AdminError, Result};
pub use provider::{
    ApiKeyState, DataSource, DataSourceKind, Diagnostic, InviteState, Provider, ProviderConfig,
    Resource, ResourceKind, WorkspaceMemberState, WorkspaceState,
};
