//! Workspace data models

use serde::{Deserialize, Serialize};

use crate::admin::helpers::non_empty;

/// Workspace from the Admin API
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Workspace {
    pub id: String,
    #[serde(rename = "type")]
    pub workspace_type: String,
    pub name: String,
    pub created_at: String,
    pub archived_at: Option<String>,
    pub display_name: Option<String>,
}

impl Workspace {
    /// Archive timestamp, `None` while the workspace is active
    pub fn archived_at(&self) -> Option<&str> {
        non_empty(self.archived_at.as_deref())
    }

    /// Display name, empty when the API omits it
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("")
    }

    pub fn is_archived(&self) -> bool {
        self.archived_at().is_some()
    }
}

/// Request payload for creating a workspace
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateWorkspaceRequest {
    pub name: String,
}

/// Request payload for renaming a workspace
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UpdateWorkspaceRequest {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_deserialization() {
        let json = r#"{
            "id": "wrkspc_01JwQvzr7rXLA5AGx3HKfFUJ",
            "type": "workspace",
            "name": "Production",
            "created_at": "2024-10-30T23:58:27.427722Z",
            "archived_at": null,
            "display_name": "Production"
        }"#;

        let ws: Workspace = serde_json::from_str(json).unwrap();
        assert_eq!(ws.id, "wrkspc_01JwQvzr7rXLA5AGx3HKfFUJ");
        assert_eq!(ws.workspace_type, "workspace");
        assert_eq!(ws.name, "Production");
        assert_eq!(ws.display_name(), "Production");
        assert!(ws.archived_at().is_none());
        assert!(!ws.is_archived());
    }

    #[test]
    fn test_workspace_archived() {
        let json = r#"{
            "id": "wrkspc_1",
            "name": "Old",
            "created_at": "2024-01-01T00:00:00Z",
            "archived_at": "2024-06-01T00:00:00Z"
        }"#;

        let ws: Workspace = serde_json::from_str(json).unwrap();
        assert_eq!(ws.archived_at(), Some("2024-06-01T00:00:00Z"));
        assert!(ws.is_archived());
        assert_eq!(ws.display_name(), "");
    }

    #[test]
    fn test_empty_archived_at_is_active() {
        let ws = Workspace {
            archived_at: Some(String::new()),
            ..Default::default()
        };
        assert!(ws.archived_at().is_none());
    }

    #[test]
    fn test_create_request_serialization() {
        let req = CreateWorkspaceRequest {
            name: "Staging".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"name": "Staging"})
        );
    }
}
