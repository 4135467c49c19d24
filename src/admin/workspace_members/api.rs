//! Workspace member API operations

use log::debug;

use crate::admin::helpers::{org_path, QueryBuilder};
use crate::admin::traits::{ListParams, ListResponse};
use crate::admin::AdminClient;
use crate::config::api;
use crate::error::Result;

use super::models::{AddWorkspaceMemberRequest, UpdateWorkspaceMemberRequest, WorkspaceMember};

fn members_path(workspace_id: &str) -> String {
    org_path(&[api::WORKSPACES, workspace_id, api::MEMBERS])
}

fn member_path(workspace_id: &str, user_id: &str) -> String {
    org_path(&[api::WORKSPACES, workspace_id, api::MEMBERS, user_id])
}

impl AdminClient {
    /// List one page of members of a workspace
    pub async fn list_workspace_members(
        &self,
        workspace_id: &str,
        params: &ListParams,
    ) -> Result<ListResponse<WorkspaceMember>> {
        let path = QueryBuilder::from_params(params).finish(&members_path(workspace_id));
        self.get_json(&path).await
    }

    /// Get a single membership by workspace and user
    pub async fn get_workspace_member(
        &self,
        workspace_id: &str,
        user_id: &str,
    ) -> Result<WorkspaceMember> {
        debug!("Fetching member {} of workspace {}", user_id, workspace_id);
        self.get_json(&member_path(workspace_id, user_id)).await
    }

    /// Add a user to a workspace
    pub async fn add_workspace_member(
        &self,
        workspace_id: &str,
        request: &AddWorkspaceMemberRequest,
    ) -> Result<WorkspaceMember> {
        debug!(
            "Adding user {} to workspace {} as {}",
            request.user_id, workspace_id, request.workspace_role
        );
        self.post_json(&members_path(workspace_id), request).await
    }

    /// Change a member's workspace role
    pub async fn update_workspace_member(
        &self,
        workspace_id: &str,
        user_id: &str,
        request: &UpdateWorkspaceMemberRequest,
    ) -> Result<WorkspaceMember> {
        debug!(
            "Setting role of {} in workspace {} to {}",
            user_id, workspace_id, request.workspace_role
        );
        self.post_json(&member_path(workspace_id, user_id), request)
            .await
    }

    /// Remove a user from a workspace
    pub async fn remove_workspace_member(&self, workspace_id: &str, user_id: &str) -> Result<()> {
        debug!("Removing user {} from workspace {}", user_id, workspace_id);
        self.delete(&member_path(workspace_id, user_id)).await
    }
}
