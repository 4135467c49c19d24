//! User-visible diagnostics reported back to the host

use std::fmt;

use crate::error::AdminError;

/// Summary used for every failed Admin API call
pub const CLIENT_ERROR: &str = "Client Error";

/// An error diagnostic: a short summary plus a detail line
///
/// Returning one from a lifecycle call aborts it; the host keeps the
/// prior state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub summary: String,
    pub detail: String,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// Wrap a failed call: `Unable to <action>: <error>`
    pub fn client_error(action: &str, err: &AdminError) -> Self {
        Self::error(CLIENT_ERROR, format!("Unable to {}: {}", action, err))
    }

    /// Local validation failure, raised before any call is made
    pub fn invalid_attribute(err: &AdminError) -> Self {
        Self::error("Invalid Attribute Value", err.to_string())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.summary, self.detail)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_wraps_action_and_cause() {
        let err = AdminError::Api {
            status: 500,
            message: "api_error: Internal server error".to_string(),
        };
        let diag = Diagnostic::client_error("create workspace", &err);
        assert_eq!(diag.summary, "Client Error");
        assert_eq!(
            diag.detail,
            "Unable to create workspace: API error (status 500): api_error: Internal server error"
        );
    }

    #[test]
    fn test_invalid_attribute() {
        let err = AdminError::Validation("Invalid role 'owner'".to_string());
        let diag = Diagnostic::invalid_attribute(&err);
        assert_eq!(diag.summary, "Invalid Attribute Value");
        assert_eq!(diag.detail, "Invalid role 'owner'");
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::error("Invalid Import ID", "bad id");
        assert_eq!(diag.to_string(), "Invalid Import ID: bad id");
    }
}
