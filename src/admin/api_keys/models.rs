//! API key data models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::admin::helpers::non_empty;
use crate::error::AdminError;

/// Who performed an action (`user`, `api_key` or `system`)
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Actor {
    pub id: String,
    #[serde(rename = "type")]
    pub actor_type: String,
}

/// API key from the Admin API
///
/// `key` is only ever present in the create response.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ApiKey {
    pub id: String,
    #[serde(rename = "type")]
    pub key_type: String,
    pub name: String,
    /// Last characters of the key, for identification
    pub hint: String,
    pub created_at: String,
    pub created_by: Option<Actor>,
    pub status: String,
    pub workspace_id: Option<String>,
    pub key: Option<String>,
}

impl ApiKey {
    /// Workspace the key is scoped to; `None` for organization-wide keys
    pub fn workspace_id(&self) -> Option<&str> {
        non_empty(self.workspace_id.as_deref())
    }

    /// Secret value, only set on a freshly created key
    pub fn secret(&self) -> Option<&str> {
        non_empty(self.key.as_deref())
    }
}

/// API key status
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApiKeyStatus {
    Active,
    Inactive,
    Archived,
}

impl ApiKeyStatus {
    pub const ALL: [ApiKeyStatus; 3] = [
        ApiKeyStatus::Active,
        ApiKeyStatus::Inactive,
        ApiKeyStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiKeyStatus::Active => "active",
            ApiKeyStatus::Inactive => "inactive",
            ApiKeyStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ApiKeyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApiKeyStatus {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApiKeyStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                AdminError::Validation(format!(
                    "Invalid API key status '{}'. Valid values: active, inactive, archived",
                    s
                ))
            })
    }
}

/// Server-side filters for listing API keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiKeyFilter {
    pub status: Option<String>,
    pub workspace_id: Option<String>,
}

/// Request payload for creating an API key
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateApiKeyRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

/// Request payload for updating an API key
///
/// Unset fields are left out of the body and stay unchanged server-side.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct UpdateApiKeyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApiKeyStatus>,
}

impl UpdateApiKeyRequest {
    /// Body that archives a key
    pub fn archive() -> Self {
        Self {
            name: None,
            status: Some(ApiKeyStatus::Archived),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.status.is_none()
    }
}
