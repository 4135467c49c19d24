/// Configuration constants for the Anthropic Admin API
pub mod api {
    /// Default API base URL
    pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

    /// Value sent in the `anthropic-version` header
    pub const API_VERSION: &str = "2023-06-01";

    /// Base path shared by every admin endpoint
    pub const ORGANIZATIONS: &str = "/v1/organizations";

    /// Workspaces collection
    pub const WORKSPACES: &str = "workspaces";

    /// API keys collection
    pub const API_KEYS: &str = "api_keys";

    /// Members sub-collection of a workspace
    pub const MEMBERS: &str = "members";

    /// Organization users collection
    pub const USERS: &str = "users";

    /// Invites collection
    pub const INVITES: &str = "invites";

    /// Page size used when draining a collection
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Whole-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Connection establishment timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Header names used on every request
pub mod headers {
    pub const API_KEY: &str = "x-api-key";
    pub const API_VERSION: &str = "anthropic-version";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const JSON: &str = "application/json";
}

/// Provider settings and their environment fallbacks
pub mod provider {
    /// Provider type name, prefix of every resource type name
    pub const TYPE_NAME: &str = "anthropic";

    /// Environment variable holding the admin key
    pub const ADMIN_KEY_ENV_VAR: &str = "ANTHROPIC_ADMIN_KEY";

    /// Environment variable overriding the base URL
    pub const BASE_URL_ENV_VAR: &str = "ANTHROPIC_BASE_URL";
}
