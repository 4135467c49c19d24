//! Invite data models

use serde::{Deserialize, Serialize};

use crate::admin::helpers::non_empty;
use crate::admin::OrganizationRole;

/// Invitation to join the organization
///
/// Status is one of `pending`, `accepted`, `expired` or `deleted`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Invite {
    pub id: String,
    #[serde(rename = "type")]
    pub invite_type: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub created_at: String,
    pub expires_at: String,
    pub inviter_id: Option<String>,
    pub workspace_ids: Vec<String>,
}

impl Invite {
    pub fn inviter_id(&self) -> Option<&str> {
        non_empty(self.inviter_id.as_deref())
    }

    pub fn is_pending(&self) -> bool {
        self.status == "pending"
    }
}

/// Request payload for creating an invite
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateInviteRequest {
    pub email: String,
    pub role: OrganizationRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invite_deserialization() {
        let json = r#"{
            "id": "invite_015gWxCN9Hfg2QhZwTK7Mdeu",
            "type": "invite",
            "email": "new@example.com",
            "role": "developer",
            "status": "pending",
            "created_at": "2024-10-30T23:58:27.427722Z",
            "expires_at": "2024-11-20T23:58:27.427722Z",
            "inviter_id": "user_01",
            "workspace_ids": ["wrkspc_1", "wrkspc_2"]
        }"#;
        let invite: Invite = serde_json::from_str(json).unwrap();
        assert_eq!(invite.email, "new@example.com");
        assert_eq!(invite.inviter_id(), Some("user_01"));
        assert_eq!(invite.workspace_ids, vec!["wrkspc_1", "wrkspc_2"]);
        assert!(invite.is_pending());
    }

    #[test]
    fn test_invite_without_optional_fields() {
        let json = r#"{"id": "invite_2", "email": "x@example.com", "role": "user", "status": "expired"}"#;
        let invite: Invite = serde_json::from_str(json).unwrap();
        assert!(invite.inviter_id().is_none());
        assert!(invite.workspace_ids.is_empty());
        assert!(!invite.is_pending());
    }

    #[test]
    fn test_create_request_serialization() {
        let req = CreateInviteRequest {
            email: "new@example.com".to_string(),
            role: OrganizationRole::User,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"email": "new@example.com", "role": "user"})
        );
    }
}
