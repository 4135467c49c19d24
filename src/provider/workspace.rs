//! `anthropic_workspace` resource

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::admin::helpers::non_empty;
use crate::admin::{AdminClient, CreateWorkspaceRequest, UpdateWorkspaceRequest, Workspace};
use crate::provider::resource::{require_id, Resource, ResourceKind};
use crate::provider::Diagnostic;

/// Persisted state of a workspace
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct WorkspaceState {
    pub id: Option<String>,
    pub name: String,
    pub display_name: Option<String>,
    pub created_at: Option<String>,
    pub archived_at: Option<String>,
}

impl WorkspaceState {
    /// Copy the server-owned fields that every response refreshes
    fn refresh(&mut self, workspace: &Workspace) {
        self.name = workspace.name.clone();
        self.display_name = Some(workspace.display_name().to_string());
        self.archived_at = workspace.archived_at().map(str::to_string);
    }
}

impl From<&Workspace> for WorkspaceState {
    fn from(workspace: &Workspace) -> Self {
        let mut state = Self {
            id: Some(workspace.id.clone()),
            created_at: Some(workspace.created_at.clone()),
            ..Self::default()
        };
        state.refresh(workspace);
        state
    }
}

pub struct WorkspaceResource<'a> {
    client: &'a AdminClient,
}

impl<'a> WorkspaceResource<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }
}

impl Resource for WorkspaceResource<'_> {
    type State = WorkspaceState;

    fn kind(&self) -> ResourceKind {
        ResourceKind::Workspace
    }

    async fn create(&self, plan: &WorkspaceState) -> Result<WorkspaceState, Diagnostic> {
        let request = CreateWorkspaceRequest {
            name: plan.name.clone(),
        };
        let workspace = self
            .client
            .create_workspace(&request)
            .await
            .map_err(|e| Diagnostic::client_error("create workspace", &e))?;
        Ok(WorkspaceState::from(&workspace))
    }

    async fn read(&self, state: &WorkspaceState) -> Result<WorkspaceState, Diagnostic> {
        let id = require_id(state.id.as_deref(), self.kind().label())?;
        let workspace = self
            .client
            .get_workspace(id)
            .await
            .map_err(|e| Diagnostic::client_error("read workspace", &e))?;
        if workspace.is_archived() {
            warn!("Workspace {} was archived outside of Terraform", id);
        }

        let mut next = state.clone();
        next.refresh(&workspace);
        next.created_at = Some(workspace.created_at);
        Ok(next)
    }

    async fn update(
        &self,
        plan: &WorkspaceState,
        prior: &WorkspaceState,
    ) -> Result<WorkspaceState, Diagnostic> {
        let id = require_id(
            non_empty(plan.id.as_deref()).or(prior.id.as_deref()),
            self.kind().label(),
        )?;
        let request = UpdateWorkspaceRequest {
            name: plan.name.clone(),
        };
        let workspace = self
            .client
            .update_workspace(id, &request)
            .await
            .map_err(|e| Diagnostic::client_error("update workspace", &e))?;

        let mut next = plan.clone();
        next.id = Some(id.to_string());
        next.created_at = prior.created_at.clone();
        next.refresh(&workspace);
        Ok(next)
    }

    async fn delete(&self, state: &WorkspaceState) -> Result<(), Diagnostic> {
        let id = require_id(state.id.as_deref(), self.kind().label())?;
        self.client
            .archive_workspace(id)
            .await
            .map_err(|e| Diagnostic::client_error("archive workspace", &e))?;
        debug!("Workspace {} archived and dropped from state", id);
        Ok(())
    }

    fn import_state(&self, id: &str) -> Result<WorkspaceState, Diagnostic> {
        Ok(WorkspaceState {
            id: Some(id.to_string()),
            ..WorkspaceState::default()
        })
    }
}
