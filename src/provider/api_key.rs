//! `anthropic_api_key` resource
//!
//! The secret `key` is only ever returned by the create call. It is kept in
//! state from then on and never overwritten by a read or an update.

use serde::{Deserialize, Serialize};

use crate::admin::helpers::non_empty;
use crate::admin::{AdminClient, ApiKey, ApiKeyStatus, CreateApiKeyRequest, UpdateApiKeyRequest};
use crate::provider::resource::{require_id, Resource, ResourceKind};
use crate::provider::Diagnostic;

/// Persisted state of an API key
#[derive(Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ApiKeyState {
    pub id: Option<String>,
    pub name: String,
    pub workspace_id: Option<String>,
    pub status: Option<String>,
    pub hint: Option<String>,
    pub key: Option<String>,
    pub created_at: Option<String>,
}

impl std::fmt::Debug for ApiKeyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyState")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("workspace_id", &self.workspace_id)
            .field("status", &self.status)
            .field("hint", &self.hint)
            .field("key", &self.key.as_ref().map(|_| "<sensitive>"))
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl ApiKeyState {
    fn refresh(&mut self, api_key: &ApiKey) {
        self.name = api_key.name.clone();
        self.status = Some(api_key.status.clone());
        self.hint = Some(api_key.hint.clone());
    }

    fn refresh_workspace(&mut self, api_key: &ApiKey) {
        if let Some(workspace_id) = api_key.workspace_id() {
            self.workspace_id = Some(workspace_id.to_string());
        }
    }
}

/// Only the fields the plan actually changed; a null planned status is
/// left to the server
fn build_update_request(
    plan: &ApiKeyState,
    prior: &ApiKeyState,
) -> Result<UpdateApiKeyRequest, Diagnostic> {
    let mut request = UpdateApiKeyRequest::default();
    if plan.name != prior.name {
        request.name = Some(plan.name.clone());
    }
    if plan.status != prior.status {
        if let Some(status) = plan.status.as_deref() {
            let status = status
                .parse::<ApiKeyStatus>()
                .map_err(|e| Diagnostic::invalid_attribute(&e))?;
            request.status = Some(status);
        }
    }
    Ok(request)
}

pub struct ApiKeyResource<'a> {
    client: &'a AdminClient,
}

impl<'a> ApiKeyResource<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }
}

impl Resource for ApiKeyResource<'_> {
    type State = ApiKeyState;

    fn kind(&self) -> ResourceKind {
        ResourceKind::ApiKey
    }

    async fn create(&self, plan: &ApiKeyState) -> Result<ApiKeyState, Diagnostic> {
        let request = CreateApiKeyRequest {
            name: plan.name.clone(),
            workspace_id: plan.workspace_id.clone(),
        };
        let api_key = self
            .client
            .create_api_key(&request)
            .await
            .map_err(|e| Diagnostic::client_error("create API key", &e))?;

        let mut next = plan.clone();
        next.id = Some(api_key.id.clone());
        next.created_at = Some(api_key.created_at.clone());
        next.key = api_key.secret().map(str::to_string);
        next.refresh(&api_key);
        next.refresh_workspace(&api_key);
        Ok(next)
    }

    async fn read(&self, state: &ApiKeyState) -> Result<ApiKeyState, Diagnostic> {
        let id = require_id(state.id.as_deref(), self.kind().label())?;
        let api_key = self
            .client
            .get_api_key(id)
            .await
            .map_err(|e| Diagnostic::client_error("read API key", &e))?;

        let mut next = state.clone();
        next.refresh(&api_key);
        next.created_at = Some(api_key.created_at.clone());
        next.refresh_workspace(&api_key);
        Ok(next)
    }

    async fn update(
        &self,
        plan: &ApiKeyState,
        prior: &ApiKeyState,
    ) -> Result<ApiKeyState, Diagnostic> {
        let id = require_id(
            non_empty(plan.id.as_deref()).or(prior.id.as_deref()),
            self.kind().label(),
        )?;
        let request = build_update_request(plan, prior)?;
        let api_key = self
            .client
            .update_api_key(id, &request)
            .await
            .map_err(|e| Diagnostic::client_error("update API key", &e))?;

        let mut next = plan.clone();
        next.id = Some(id.to_string());
        next.created_at = plan.created_at.clone().or_else(|| prior.created_at.clone());
        next.key = prior.key.clone();
        next.refresh(&api_key);
        Ok(next)
    }

    async fn delete(&self, state: &ApiKeyState) -> Result<(), Diagnostic> {
        let id = require_id(state.id.as_deref(), self.kind().label())?;
        self.client
            .delete_api_key(id)
            .await
            .map_err(|e| Diagnostic::client_error("delete API key", &e))
    }

    fn import_state(&self, id: &str) -> Result<ApiKeyState, Diagnostic> {
        Ok(ApiKeyState {
            id: Some(id.to_string()),
            ..ApiKeyState::default()
        })
    }
}
