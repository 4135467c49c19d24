//! Workspace member data models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AdminError;

/// A user's membership in a workspace
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct WorkspaceMember {
    pub user_id: String,
    pub workspace_id: String,
    pub workspace_role: String,
    #[serde(rename = "type")]
    pub member_type: String,
}

/// Role of a user inside a workspace
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceRole {
    WorkspaceUser,
    WorkspaceAdmin,
    WorkspaceDeveloper,
}

impl WorkspaceRole {
    pub const ALL: [WorkspaceRole; 3] = [
        WorkspaceRole::WorkspaceUser,
        WorkspaceRole::WorkspaceAdmin,
        WorkspaceRole::WorkspaceDeveloper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkspaceRole::WorkspaceUser => "workspace_user",
            WorkspaceRole::WorkspaceAdmin => "workspace_admin",
            WorkspaceRole::WorkspaceDeveloper => "workspace_developer",
        }
    }
}

impl fmt::Display for WorkspaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkspaceRole {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkspaceRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| {
                AdminError::Validation(format!(
                    "Invalid workspace role '{}'. Valid values: workspace_user, workspace_admin, workspace_developer",
                    s
                ))
            })
    }
}

/// Request payload for adding a user to a workspace
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AddWorkspaceMemberRequest {
    pub user_id: String,
    pub workspace_role: WorkspaceRole,
}

/// Request payload for changing a member's role
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UpdateWorkspaceMemberRequest {
    pub workspace_role: WorkspaceRole,
}
