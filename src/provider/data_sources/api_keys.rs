use serde::{Deserialize, Serialize};

use crate::admin::{drain_pages, AdminClient, ApiKeyFilter};
use crate::config::api;
use crate::provider::resource::{DataSource, DataSourceKind};
use crate::provider::Diagnostic;

use super::ApiKeyModel;

/// Optional filters in, matching keys out
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ApiKeysModel {
    pub workspace_id: Option<String>,
    pub status: Option<String>,
    pub api_keys: Vec<ApiKeyModel>,
}

pub struct ApiKeysDataSource<'a> {
    client: &'a AdminClient,
}

impl<'a> ApiKeysDataSource<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }
}

impl DataSource for ApiKeysDataSource<'_> {
    type Model = ApiKeysModel;

    fn kind(&self) -> DataSourceKind {
        DataSourceKind::ApiKeys
    }

    async fn read(&self, config: &ApiKeysModel) -> Result<ApiKeysModel, Diagnostic> {
        let filter = ApiKeyFilter {
            status: config.status.clone(),
            workspace_id: config.workspace_id.clone(),
        };
        let client = self.client;
        let filter = &filter;
        let api_keys = drain_pages(api::DEFAULT_PAGE_SIZE, |params| async move {
            client.list_api_keys(&params, filter).await
        })
        .await
        .map_err(|e| Diagnostic::client_error("list API keys", &e))?;

        Ok(ApiKeysModel {
            workspace_id: config.workspace_id.clone(),
            status: config.status.clone(),
            api_keys: api_keys.into_iter().map(ApiKeyModel::from).collect(),
        })
    }
}
