//! Anthropic Admin API client module
//!
//! Transport plus one submodule of typed operations per entity kind.

pub mod api_keys;
mod client;
mod credentials;
pub mod helpers;
pub mod invites;
pub mod traits;
pub mod users;
pub mod workspace_members;
pub mod workspaces;

pub use api_keys::{
    Actor, ApiKey, ApiKeyFilter, ApiKeyStatus, CreateApiKeyRequest, UpdateApiKeyRequest,
};
pub use client::AdminClient;
pub use credentials::{ResolvedSettings, SettingsResolver};
pub use helpers::drain_pages;
pub use invites::{CreateInviteRequest, Invite};
pub use traits::{ListParams, ListResponse};
pub use users::{OrganizationRole, OrganizationUser, UpdateOrganizationUserRequest};
pub use workspace_members::{
    AddWorkspaceMemberRequest, UpdateWorkspaceMemberRequest, WorkspaceMember, WorkspaceRole,
};
pub use workspaces::{CreateWorkspaceRequest, UpdateWorkspaceRequest, Workspace};
