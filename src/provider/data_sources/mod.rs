//! Read-only data sources

mod api_key;
mod api_keys;
mod workspace;
mod workspaces;

pub use api_key::{ApiKeyDataSource, ApiKeyModel};
pub use api_keys::{ApiKeysDataSource, ApiKeysModel};
pub use workspace::{WorkspaceDataSource, WorkspaceModel};
pub use workspaces::{WorkspacesDataSource, WorkspacesModel};
