use serde::{Deserialize, Serialize};

use crate::admin::{drain_pages, AdminClient};
use crate::config::api;
use crate::provider::resource::{DataSource, DataSourceKind};
use crate::provider::Diagnostic;

use super::WorkspaceModel;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct WorkspacesModel {
    pub workspaces: Vec<WorkspaceModel>,
}

/// Every workspace in the organization, in API order
pub struct WorkspacesDataSource<'a> {
    client: &'a AdminClient,
}

impl<'a> WorkspacesDataSource<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }
}

impl DataSource for WorkspacesDataSource<'_> {
    type Model = WorkspacesModel;

    fn kind(&self) -> DataSourceKind {
        DataSourceKind::Workspaces
    }

    async fn read(&self, _config: &WorkspacesModel) -> Result<WorkspacesModel, Diagnostic> {
        let client = self.client;
        let workspaces = drain_pages(api::DEFAULT_PAGE_SIZE, |params| async move {
            client.list_workspaces(&params).await
        })
        .await
        .map_err(|e| Diagnostic::client_error("list workspaces", &e))?;

        Ok(WorkspacesModel {
            workspaces: workspaces.into_iter().map(WorkspaceModel::from).collect(),
        })
    }
}
