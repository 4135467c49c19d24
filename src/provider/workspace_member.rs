//! `anthropic_workspace_member` resource
//!
//! A membership has no id of its own; it is addressed as
//! `<workspace_id>/<user_id>`.

use serde::{Deserialize, Serialize};

use crate::admin::{
    AddWorkspaceMemberRequest, AdminClient, UpdateWorkspaceMemberRequest, WorkspaceRole,
};
use crate::error::AdminError;
use crate::provider::resource::{require_id, Resource, ResourceKind};
use crate::provider::Diagnostic;

/// Persisted state of a workspace membership
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct WorkspaceMemberState {
    pub id: Option<String>,
    pub workspace_id: String,
    pub user_id: String,
    pub workspace_role: String,
}

/// Composite id for a membership
pub fn member_id(workspace_id: &str, user_id: &str) -> String {
    format!("{}/{}", workspace_id, user_id)
}

/// Split a composite id into `(workspace_id, user_id)`
///
/// Exactly one `/` is accepted; segments are not checked for emptiness.
pub fn parse_member_id(id: &str) -> Result<(&str, &str), Diagnostic> {
    let parts: Vec<&str> = id.split('/').collect();
    match parts.as_slice() {
        [workspace_id, user_id] => Ok((*workspace_id, *user_id)),
        _ => Err(Diagnostic::error(
            "Invalid Import ID",
            AdminError::Validation(format!(
                "Expected import ID format: workspace_id/user_id, got: {}",
                id
            ))
            .to_string(),
        )),
    }
}

/// Both halves of the address; an empty one fails before any call
fn member_address(state: &WorkspaceMemberState) -> Result<(&str, &str), Diagnostic> {
    let workspace_id = require_id(Some(state.workspace_id.as_str()), "workspace")?;
    let user_id = require_id(Some(state.user_id.as_str()), "user")?;
    Ok((workspace_id, user_id))
}

fn parse_role(role: &str) -> Result<WorkspaceRole, Diagnostic> {
    role.parse::<WorkspaceRole>()
        .map_err(|e| Diagnostic::invalid_attribute(&e))
}

pub struct WorkspaceMemberResource<'a> {
    client: &'a AdminClient,
}

impl<'a> WorkspaceMemberResource<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }
}

impl Resource for WorkspaceMemberResource<'_> {
    type State = WorkspaceMemberState;

    fn kind(&self) -> ResourceKind {
        ResourceKind::WorkspaceMember
    }

    async fn create(&self, plan: &WorkspaceMemberState) -> Result<WorkspaceMemberState, Diagnostic> {
        let (workspace_id, user_id) = member_address(plan)?;
        let request = AddWorkspaceMemberRequest {
            user_id: user_id.to_string(),
            workspace_role: parse_role(&plan.workspace_role)?,
        };
        let member = self
            .client
            .add_workspace_member(workspace_id, &request)
            .await
            .map_err(|e| Diagnostic::client_error("add workspace member", &e))?;

        Ok(WorkspaceMemberState {
            id: Some(member_id(&member.workspace_id, &member.user_id)),
            workspace_id: member.workspace_id,
            user_id: member.user_id,
            workspace_role: member.workspace_role,
        })
    }

    async fn read(&self, state: &WorkspaceMemberState) -> Result<WorkspaceMemberState, Diagnostic> {
        let (workspace_id, user_id) = member_address(state)?;
        let member = self
            .client
            .get_workspace_member(workspace_id, user_id)
            .await
            .map_err(|e| Diagnostic::client_error("read workspace member", &e))?;

        let mut next = state.clone();
        next.workspace_role = member.workspace_role;
        Ok(next)
    }

    async fn update(
        &self,
        plan: &WorkspaceMemberState,
        _prior: &WorkspaceMemberState,
    ) -> Result<WorkspaceMemberState, Diagnostic> {
        let (workspace_id, user_id) = member_address(plan)?;
        let request = UpdateWorkspaceMemberRequest {
            workspace_role: parse_role(&plan.workspace_role)?,
        };
        let member = self
            .client
            .update_workspace_member(workspace_id, user_id, &request)
            .await
            .map_err(|e| Diagnostic::client_error("update workspace member", &e))?;

        let mut next = plan.clone();
        next.workspace_role = member.workspace_role;
        Ok(next)
    }

    async fn delete(&self, state: &WorkspaceMemberState) -> Result<(), Diagnostic> {
        let (workspace_id, user_id) = member_address(state)?;
        self.client
            .remove_workspace_member(workspace_id, user_id)
            .await
            .map_err(|e| Diagnostic::client_error("remove workspace member", &e))
    }

    fn import_state(&self, id: &str) -> Result<WorkspaceMemberState, Diagnostic> {
        let (workspace_id, user_id) = parse_member_id(id)?;
        Ok(WorkspaceMemberState {
            id: Some(id.to_string()),
            workspace_id: workspace_id.to_string(),
            user_id: user_id.to_string(),
            workspace_role: String::new(),
        })
    }
}
