//! Workspace API operations

use log::debug;

use crate::admin::helpers::{org_path, QueryBuilder};
use crate::admin::traits::{ListParams, ListResponse};
use crate::admin::AdminClient;
use crate::config::api;
use crate::error::Result;

use super::models::{CreateWorkspaceRequest, UpdateWorkspaceRequest, Workspace};

/// Build the list path for workspaces with optional paging params
fn build_workspaces_path(params: &ListParams) -> String {
    QueryBuilder::from_params(params).finish(&org_path(&[api::WORKSPACES]))
}

impl AdminClient {
    /// List one page of workspaces
    pub async fn list_workspaces(&self, params: &ListParams) -> Result<ListResponse<Workspace>> {
        let path = build_workspaces_path(params);
        self.get_json(&path).await
    }

    /// Get a workspace by ID
    pub async fn get_workspace(&self, workspace_id: &str) -> Result<Workspace> {
        debug!("Fetching workspace {}", workspace_id);
        self.get_json(&org_path(&[api::WORKSPACES, workspace_id]))
            .await
    }

    /// Create a new workspace
    pub async fn create_workspace(&self, request: &CreateWorkspaceRequest) -> Result<Workspace> {
        debug!("Creating workspace '{}'", request.name);
        let workspace: Workspace = self
            .post_json(&org_path(&[api::WORKSPACES]), request)
            .await?;
        debug!("Created workspace {}", workspace.id);
        Ok(workspace)
    }

    /// Rename an existing workspace
    pub async fn update_workspace(
        &self,
        workspace_id: &str,
        request: &UpdateWorkspaceRequest,
    ) -> Result<Workspace> {
        debug!("Updating workspace {}", workspace_id);
        self.post_json(&org_path(&[api::WORKSPACES, workspace_id]), request)
            .await
    }

    /// Archive a workspace
    ///
    /// Workspaces cannot be deleted; archiving is the only way to retire one.
    pub async fn archive_workspace(&self, workspace_id: &str) -> Result<Workspace> {
        debug!("Archiving workspace {}", workspace_id);
        self.post_empty(&org_path(&[api::WORKSPACES, workspace_id, "archive"]))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn workspace_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "type": "workspace",
            "name": name,
            "display_name": name,
            "created_at": "2024-10-30T23:58:27.427722Z",
            "archived_at": null
        })
    }

    #[test]
    fn test_build_workspaces_path() {
        assert_eq!(
            build_workspaces_path(&ListParams::default()),
            "/v1/organizations/workspaces"
        );
        assert_eq!(
            build_workspaces_path(&ListParams {
                limit: 100,
                before_id: None,
                after_id: Some("wrkspc_9".to_string()),
            }),
            "/v1/organizations/workspaces?limit=100&after_id=wrkspc_9"
        );
    }

    #[tokio::test]
    async fn test_list_workspaces() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/organizations/workspaces"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    workspace_json("wrkspc_1", "Production"),
                    workspace_json("wrkspc_2", "Staging")
                ],
                "has_more": false,
                "first_id": "wrkspc_1",
                "last_id": "wrkspc_2"
            })))
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let page = client
            .list_workspaces(&ListParams::page(10, None))
            .await
            .unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].name, "Production");
        assert_eq!(page.last_id.as_deref(), Some("wrkspc_2"));
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn test_get_workspace() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/organizations/workspaces/wrkspc_1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(workspace_json("wrkspc_1", "Production")),
            )
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let ws = client.get_workspace("wrkspc_1").await.unwrap();
        assert_eq!(ws.id, "wrkspc_1");
        assert!(ws.archived_at().is_none());
    }

    #[tokio::test]
    async fn test_get_workspace_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/organizations/workspaces/wrkspc_missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "type": "error",
                "error": {"type": "not_found_error", "message": "Workspace not found"}
            })))
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let err = client.get_workspace("wrkspc_missing").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("not_found_error: Workspace not found"));
    }

    #[tokio::test]
    async fn test_create_workspace() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/organizations/workspaces"))
            .and(body_json(serde_json::json!({"name": "Production"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(workspace_json("wrkspc_new", "Production")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let ws = client
            .create_workspace(&CreateWorkspaceRequest {
                name: "Production".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(ws.id, "wrkspc_new");
    }

    #[tokio::test]
    async fn test_update_workspace() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/organizations/workspaces/wrkspc_1"))
            .and(body_json(serde_json::json!({"name": "Renamed"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(workspace_json("wrkspc_1", "Renamed")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let ws = client
            .update_workspace(
                "wrkspc_1",
                &UpdateWorkspaceRequest {
                    name: "Renamed".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(ws.name, "Renamed");
    }

    #[tokio::test]
    async fn test_archive_workspace() {
        let mock_server = MockServer::start().await;

        let mut archived = workspace_json("wrkspc_1", "Production");
        archived["archived_at"] = serde_json::json!("2024-11-01T00:00:00Z");

        Mock::given(method("POST"))
            .and(path("/v1/organizations/workspaces/wrkspc_1/archive"))
            .respond_with(ResponseTemplate::new(200).set_body_json(archived))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let ws = client.archive_workspace("wrkspc_1").await.unwrap();
        assert_eq!(ws.archived_at(), Some("2024-11-01T00:00:00Z"));
    }
}
