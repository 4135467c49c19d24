//! API keys module - create, rename, deactivate and archive API keys

mod api;
mod models;

pub use models::{
    Actor, ApiKey, ApiKeyFilter, ApiKeyStatus, CreateApiKeyRequest, UpdateApiKeyRequest,
};
