//! Organization user data models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AdminError;

/// A member of the organization
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct OrganizationUser {
    pub id: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// Organization-level role, shared by users and invites
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationRole {
    User,
    Admin,
    Developer,
}

impl OrganizationRole {
    pub const ALL: [OrganizationRole; 3] = [
        OrganizationRole::User,
        OrganizationRole::Admin,
        OrganizationRole::Developer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrganizationRole::User => "user",
            OrganizationRole::Admin => "admin",
            OrganizationRole::Developer => "developer",
        }
    }
}

impl fmt::Display for OrganizationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrganizationRole {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrganizationRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| {
                AdminError::Validation(format!(
                    "Invalid role '{}'. Valid values: user, admin, developer",
                    s
                ))
            })
    }
}

/// Request payload for changing a user's organization role
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UpdateOrganizationUserRequest {
    pub role: OrganizationRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialization() {
        let json = r#"{
            "id": "user_01WCz1FkmYMm4gnmykNKUu3Q",
            "type": "user",
            "email": "ada@example.com",
            "name": "Ada",
            "role": "developer",
            "added_at": "2024-10-30T23:58:27.427722Z"
        }"#;
        let user: OrganizationUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.role, "developer");
    }

    #[test]
    fn test_organization_role_parse() {
        assert_eq!(
            "admin".parse::<OrganizationRole>().unwrap(),
            OrganizationRole::Admin
        );
        let err = "workspace_admin".parse::<OrganizationRole>().unwrap_err();
        assert!(err.to_string().contains("user, admin, developer"));
    }
}
