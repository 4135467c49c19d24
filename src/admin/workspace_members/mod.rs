//! Workspace members module - grant, change and revoke workspace roles

mod api;
mod models;

pub use models::{
    AddWorkspaceMemberRequest, UpdateWorkspaceMemberRequest, WorkspaceMember, WorkspaceRole,
};
