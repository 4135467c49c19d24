use serde::{Deserialize, Serialize};

use crate::admin::{AdminClient, Workspace};
use crate::provider::resource::{require_id, DataSource, DataSourceKind};
use crate::provider::Diagnostic;

/// Workspace attributes as exposed by data sources
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct WorkspaceModel {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub created_at: String,
    pub archived_at: Option<String>,
}

impl From<Workspace> for WorkspaceModel {
    fn from(workspace: Workspace) -> Self {
        Self {
            archived_at: workspace.archived_at().map(str::to_string),
            display_name: workspace.display_name().to_string(),
            id: workspace.id,
            name: workspace.name,
            created_at: workspace.created_at,
        }
    }
}

/// Look up one workspace by id
pub struct WorkspaceDataSource<'a> {
    client: &'a AdminClient,
}

impl<'a> WorkspaceDataSource<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }
}

impl DataSource for WorkspaceDataSource<'_> {
    type Model = WorkspaceModel;

    fn kind(&self) -> DataSourceKind {
        DataSourceKind::Workspace
    }

    async fn read(&self, config: &WorkspaceModel) -> Result<WorkspaceModel, Diagnostic> {
        let id = require_id(Some(config.id.as_str()), "workspace")?;
        let workspace = self
            .client
            .get_workspace(id)
            .await
            .map_err(|e| Diagnostic::client_error("read workspace", &e))?;
        Ok(WorkspaceModel {
            id: config.id.clone(),
            ..WorkspaceModel::from(workspace)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_read_workspace() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/organizations/workspaces/wrkspc_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "wrkspc_1",
                "type": "workspace",
                "name": "Production",
                "display_name": "Production",
                "created_at": "2024-10-30T23:58:27.427722Z",
                "archived_at": null
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let model = WorkspaceDataSource::new(&client)
            .read(&WorkspaceModel {
                id: "wrkspc_1".to_string(),
                ..WorkspaceModel::default()
            })
            .await
            .unwrap();
        assert_eq!(model.name, "Production");
        assert_eq!(model.created_at, "2024-10-30T23:58:27.427722Z");
        assert!(model.archived_at.is_none());
    }

    #[tokio::test]
    async fn test_read_requires_id() {
        let client = AdminClient::test_client("http://127.0.0.1:9");
        let diag = WorkspaceDataSource::new(&client)
            .read(&WorkspaceModel::default())
            .await
            .unwrap_err();
        assert_eq!(diag.summary, "Invalid Attribute Value");
    }
}
