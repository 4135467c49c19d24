use std::fmt;

/// Custom error type for Admin API operations
#[derive(Debug)]
pub enum AdminError {
    /// Request body could not be serialized
    Encode(String),
    /// HTTP request failed (DNS, TLS, timeout, connection reset)
    Http(reqwest::Error),
    /// API returned a non-success response
    Api { status: u16, message: String },
    /// Response body could not be decoded
    Json(String),
    /// Provider configuration error
    Config(String),
    /// Local input validation failed
    Validation(String),
}

impl AdminError {
    /// True when the API answered 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, AdminError::Api { status: 404, .. })
    }
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminError::Encode(msg) => write!(f, "failed to marshal request body: {}", msg),
            AdminError::Http(e) => write!(f, "request failed: {}", e),
            AdminError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            AdminError::Json(msg) => write!(f, "failed to unmarshal response: {}", msg),
            AdminError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AdminError::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AdminError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AdminError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AdminError {
    fn from(err: reqwest::Error) -> Self {
        AdminError::Http(err)
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::Json(err.to_string())
    }
}

/// Result type alias for Admin API operations
pub type Result<T> = std::result::Result<T, AdminError>;
