//! Workspaces module - create, rename and archive organization workspaces

mod api;
mod models;

pub use models::{CreateWorkspaceRequest, UpdateWorkspaceRequest, Workspace};
