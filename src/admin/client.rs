//! Admin API HTTP client

use log::debug;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{api, headers};
use crate::error::{AdminError, Result};

/// Longest slice of a response body quoted in a decode error
const BODY_EXCERPT_LEN: usize = 200;

/// Error body returned by the Admin API
///
/// Some endpoints return the message at the top level, others nest it
/// under `error`. Both shapes are accepted.
#[derive(Deserialize, Debug, Default)]
struct ApiErrorBody {
    #[serde(rename = "type")]
    error_type: Option<String>,
    message: Option<String>,
    error: Option<NestedApiError>,
}

#[derive(Deserialize, Debug, Default)]
struct NestedApiError {
    #[serde(rename = "type")]
    error_type: Option<String>,
    message: Option<String>,
}

impl ApiErrorBody {
    /// Render as `type: message`, preferring the nested shape
    fn describe(&self) -> Option<String> {
        if let Some(nested) = &self.error {
            if let Some(message) = nested.message.as_deref().filter(|m| !m.is_empty()) {
                return Some(format!(
                    "{}: {}",
                    nested.error_type.as_deref().unwrap_or(""),
                    message
                ));
            }
        }
        if self.error_type.is_none() && self.message.is_none() {
            return None;
        }
        Some(format!(
            "{}: {}",
            self.error_type.as_deref().unwrap_or(""),
            self.message.as_deref().unwrap_or("")
        ))
    }
}

/// Build the error for a non-success response
pub(crate) fn decode_api_error(status: u16, body: &str) -> AdminError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.describe())
        .unwrap_or_else(|| body.to_string());
    AdminError::Api { status, message }
}

fn excerpt(body: &str) -> &str {
    match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

/// Decode a success body; an empty body yields `None`
pub(crate) fn decode_body<T>(body: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(body).map(Some).map_err(|e| {
        AdminError::Json(format!("{} (body: {})", e, excerpt(body)))
    })
}

fn encode_body<B>(body: &B) -> Result<Vec<u8>>
where
    B: Serialize + ?Sized,
{
    serde_json::to_vec(body).map_err(|e| AdminError::Encode(e.to_string()))
}

/// Anthropic Admin API client
///
/// Configuration is fixed at construction; share it by reference.
pub struct AdminClient {
    client: Client,
    admin_key: String,
    base_url: String,
    api_version: String,
}

impl AdminClient {
    /// Create a client with the default request timeout
    pub fn new(admin_key: String, base_url: String) -> Result<Self> {
        Self::with_timeout(
            admin_key,
            base_url,
            Duration::from_secs(api::REQUEST_TIMEOUT_SECS),
        )
    }

    /// Create a client with a custom request timeout
    ///
    /// Fails when the underlying HTTP client cannot be built; there is no
    /// fallback to a client without timeouts.
    pub fn with_timeout(admin_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(timeout)
            .build()
            .map_err(|e| AdminError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            admin_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_version: api::API_VERSION.to_string(),
        })
    }

    /// Base URL every path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Value of the `anthropic-version` header
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Create a request builder with the standard headers
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .header(headers::API_KEY, &self.admin_key)
            .header(headers::API_VERSION, &self.api_version)
            .header(headers::CONTENT_TYPE, headers::JSON)
    }

    /// Issue a single request and return the raw success body
    ///
    /// Non-success statuses are turned into [`AdminError::Api`].
    async fn execute(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<String> {
        let mut builder = self.request(method.clone(), path);
        if let Some(bytes) = body {
            builder = builder.body(bytes);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            debug!("{} {} failed with status {}", method, path, status.as_u16());
            return Err(decode_api_error(status.as_u16(), &text));
        }
        Ok(text)
    }

    /// GET a path and decode the response
    pub(crate) async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let text = self.execute(Method::GET, path, None).await?;
        Ok(decode_body(&text)?.unwrap_or_default())
    }

    /// POST a JSON body and decode the response
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let bytes = encode_body(body)?;
        let text = self.execute(Method::POST, path, Some(bytes)).await?;
        Ok(decode_body(&text)?.unwrap_or_default())
    }

    /// POST without a body and decode the response
    pub(crate) async fn post_empty<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let text = self.execute(Method::POST, path, None).await?;
        Ok(decode_body(&text)?.unwrap_or_default())
    }

    /// DELETE a path, ignoring any response body
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.execute(Method::DELETE, path, None).await?;
        Ok(())
    }
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("admin_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
impl AdminClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new("test-admin-key".to_string(), base_url.to_string())
            .expect("test client should build")
    }
}
