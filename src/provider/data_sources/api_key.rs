use serde::{Deserialize, Serialize};

use crate::admin::{AdminClient, ApiKey};
use crate::provider::resource::{require_id, DataSource, DataSourceKind};
use crate::provider::Diagnostic;

/// API key attributes as exposed by data sources; never carries the secret
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ApiKeyModel {
    pub id: String,
    pub name: String,
    pub workspace_id: Option<String>,
    pub status: String,
    pub hint: String,
    pub created_at: String,
}

impl From<ApiKey> for ApiKeyModel {
    fn from(api_key: ApiKey) -> Self {
        Self {
            workspace_id: api_key.workspace_id().map(str::to_string),
            id: api_key.id,
            name: api_key.name,
            status: api_key.status,
            hint: api_key.hint,
            created_at: api_key.created_at,
        }
    }
}

/// Look up one API key by id
pub struct ApiKeyDataSource<'a> {
    client: &'a AdminClient,
}

impl<'a> ApiKeyDataSource<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }
}

impl DataSource for ApiKeyDataSource<'_> {
    type Model = ApiKeyModel;

    fn kind(&self) -> DataSourceKind {
        DataSourceKind::ApiKey
    }

    async fn read(&self, config: &ApiKeyModel) -> Result<ApiKeyModel, Diagnostic> {
        let id = require_id(Some(config.id.as_str()), "API key")?;
        let api_key = self
            .client
            .get_api_key(id)
            .await
            .map_err(|e| Diagnostic::client_error("read API key", &e))?;
        Ok(ApiKeyModel {
            id: config.id.clone(),
            ..ApiKeyModel::from(api_key)
        })
    }
}
