//! API key API operations

use log::debug;

use crate::admin::helpers::{org_path, QueryBuilder};
use crate::admin::traits::{ListParams, ListResponse};
use crate::admin::AdminClient;
use crate::config::api;
use crate::error::Result;

use super::models::{ApiKey, ApiKeyFilter, CreateApiKeyRequest, UpdateApiKeyRequest};

/// Build the list path for API keys: paging params first, then filters
fn build_api_keys_path(params: &ListParams, filter: &ApiKeyFilter) -> String {
    let mut query = QueryBuilder::from_params(params);
    query.push("status", filter.status.as_deref());
    query.push("workspace_id", filter.workspace_id.as_deref());
    query.finish(&org_path(&[api::API_KEYS]))
}

impl AdminClient {
    /// List one page of API keys, optionally filtered
    pub async fn list_api_keys(
        &self,
        params: &ListParams,
        filter: &ApiKeyFilter,
    ) -> Result<ListResponse<ApiKey>> {
        let path = build_api_keys_path(params, filter);
        self.get_json(&path).await
    }

    /// Get an API key by ID (never includes the secret)
    pub async fn get_api_key(&self, api_key_id: &str) -> Result<ApiKey> {
        debug!("Fetching API key {}", api_key_id);
        self.get_json(&org_path(&[api::API_KEYS, api_key_id])).await
    }

    /// Create a new API key; the response carries the secret once
    pub async fn create_api_key(&self, request: &CreateApiKeyRequest) -> Result<ApiKey> {
        debug!(
            "Creating API key '{}' (workspace: {:?})",
            request.name, request.workspace_id
        );
        self.post_json(&org_path(&[api::API_KEYS]), request).await
    }

    /// Update name and/or status of an API key
    pub async fn update_api_key(
        &self,
        api_key_id: &str,
        request: &UpdateApiKeyRequest,
    ) -> Result<ApiKey> {
        debug!("Updating API key {}", api_key_id);
        self.post_json(&org_path(&[api::API_KEYS, api_key_id]), request)
            .await
    }

    /// Retire an API key
    ///
    /// There is no delete endpoint; the key is archived through an update.
    pub async fn delete_api_key(&self, api_key_id: &str) -> Result<()> {
        debug!("Archiving API key {}", api_key_id);
        self.update_api_key(api_key_id, &UpdateApiKeyRequest::archive())
            .await?;
        Ok(())
    }
}
