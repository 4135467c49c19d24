//! Lifecycle traits and the per-kind policies the adapters follow

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use crate::error::AdminError;
use crate::provider::Diagnostic;

/// How a resource is retired when the host destroys it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePolicy {
    /// POST to the archive endpoint; the object stays visible as archived
    Archive,
    /// Update the object's status to `archived`
    ArchiveViaStatusUpdate,
    /// Real DELETE endpoint
    Remove,
}

/// How in-place changes are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// Send the mutable fields on every update
    InPlace,
    /// Send only the fields that differ from prior state
    Differential,
    /// Every update is rejected; changes force recreation
    Forbidden,
}

/// How an import identifier maps onto state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportPolicy {
    /// The import id is the remote id
    Passthrough,
    /// The import id is `<workspace_id>/<user_id>`
    Composite,
}

/// The closed set of managed resource kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Workspace,
    ApiKey,
    WorkspaceMember,
    Invite,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Workspace,
        ResourceKind::ApiKey,
        ResourceKind::WorkspaceMember,
        ResourceKind::Invite,
    ];

    pub fn type_name(&self) -> &'static str {
        match self {
            ResourceKind::Workspace => "anthropic_workspace",
            ResourceKind::ApiKey => "anthropic_api_key",
            ResourceKind::WorkspaceMember => "anthropic_workspace_member",
            ResourceKind::Invite => "anthropic_invite",
        }
    }

    pub fn delete_policy(&self) -> DeletePolicy {
        match self {
            ResourceKind::Workspace => DeletePolicy::Archive,
            ResourceKind::ApiKey => DeletePolicy::ArchiveViaStatusUpdate,
            ResourceKind::WorkspaceMember | ResourceKind::Invite => DeletePolicy::Remove,
        }
    }

    pub fn update_policy(&self) -> UpdatePolicy {
        match self {
            ResourceKind::Workspace | ResourceKind::WorkspaceMember => UpdatePolicy::InPlace,
            ResourceKind::ApiKey => UpdatePolicy::Differential,
            ResourceKind::Invite => UpdatePolicy::Forbidden,
        }
    }

    pub fn import_policy(&self) -> ImportPolicy {
        match self {
            ResourceKind::WorkspaceMember => ImportPolicy::Composite,
            _ => ImportPolicy::Passthrough,
        }
    }

    /// Human-readable noun used in messages
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Workspace => "workspace",
            ResourceKind::ApiKey => "API key",
            ResourceKind::WorkspaceMember => "workspace member",
            ResourceKind::Invite => "invite",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Read-only data source kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSourceKind {
    Workspace,
    Workspaces,
    ApiKey,
    ApiKeys,
}

impl DataSourceKind {
    pub const ALL: [DataSourceKind; 4] = [
        DataSourceKind::Workspace,
        DataSourceKind::Workspaces,
        DataSourceKind::ApiKey,
        DataSourceKind::ApiKeys,
    ];

    pub fn type_name(&self) -> &'static str {
        match self {
            DataSourceKind::Workspace => "anthropic_workspace",
            DataSourceKind::Workspaces => "anthropic_workspaces",
            DataSourceKind::ApiKey => "anthropic_api_key",
            DataSourceKind::ApiKeys => "anthropic_api_keys",
        }
    }
}

/// A managed resource driven through create/read/update/delete/import
///
/// Every call either returns the new state or a diagnostic; on a
/// diagnostic the host keeps whatever state it had.
#[allow(async_fn_in_trait)]
pub trait Resource {
    /// Persisted state record for one resource instance
    type State: Clone + fmt::Debug + Default + PartialEq + Serialize + DeserializeOwned;

    fn kind(&self) -> ResourceKind;

    async fn create(&self, plan: &Self::State) -> Result<Self::State, Diagnostic>;

    async fn read(&self, state: &Self::State) -> Result<Self::State, Diagnostic>;

    async fn update(
        &self,
        plan: &Self::State,
        prior: &Self::State,
    ) -> Result<Self::State, Diagnostic>;

    async fn delete(&self, state: &Self::State) -> Result<(), Diagnostic>;

    /// Seed state from an import identifier without calling the API
    fn import_state(&self, id: &str) -> Result<Self::State, Diagnostic>;
}

/// A read-only lookup
#[allow(async_fn_in_trait)]
pub trait DataSource {
    /// Configuration in, computed attributes filled on the way out
    type Model: Clone + fmt::Debug + Default + PartialEq + Serialize + DeserializeOwned;

    fn kind(&self) -> DataSourceKind;

    async fn read(&self, config: &Self::Model) -> Result<Self::Model, Diagnostic>;
}

/// Remote id from state; adapters refuse to call the API without one
pub(crate) fn require_id<'s>(id: Option<&'s str>, kind: &str) -> Result<&'s str, Diagnostic> {
    crate::admin::helpers::non_empty(id).ok_or_else(|| {
        Diagnostic::invalid_attribute(&AdminError::Validation(format!(
            "The {} id is not set",
            kind
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_policies() {
        assert_eq!(ResourceKind::Workspace.delete_policy(), DeletePolicy::Archive);
        assert_eq!(
            ResourceKind::ApiKey.delete_policy(),
            DeletePolicy::ArchiveViaStatusUpdate
        );
        assert_eq!(
            ResourceKind::WorkspaceMember.delete_policy(),
            DeletePolicy::Remove
        );
        assert_eq!(ResourceKind::Invite.delete_policy(), DeletePolicy::Remove);
    }

    #[test]
    fn test_update_policies() {
        assert_eq!(ResourceKind::Workspace.update_policy(), UpdatePolicy::InPlace);
        assert_eq!(ResourceKind::ApiKey.update_policy(), UpdatePolicy::Differential);
        assert_eq!(
            ResourceKind::WorkspaceMember.update_policy(),
            UpdatePolicy::InPlace
        );
        assert_eq!(ResourceKind::Invite.update_policy(), UpdatePolicy::Forbidden);
    }

    #[test]
    fn test_import_policies() {
        assert_eq!(
            ResourceKind::WorkspaceMember.import_policy(),
            ImportPolicy::Composite
        );
        for kind in [
            ResourceKind::Workspace,
            ResourceKind::ApiKey,
            ResourceKind::Invite,
        ] {
            assert_eq!(kind.import_policy(), ImportPolicy::Passthrough);
        }
    }

    #[test]
    fn test_type_names_are_prefixed() {
        for kind in ResourceKind::ALL {
            assert!(kind.type_name().starts_with("anthropic_"));
        }
        for kind in DataSourceKind::ALL {
            assert!(kind.type_name().starts_with("anthropic_"));
        }
        assert_eq!(ResourceKind::WorkspaceMember.to_string(), "anthropic_workspace_member");
    }

    #[test]
    fn test_require_id() {
        assert_eq!(require_id(Some("wrkspc_1"), "workspace").unwrap(), "wrkspc_1");
        let diag = require_id(Some(""), "workspace").unwrap_err();
        assert!(diag.detail.contains("workspace id is not set"));
        assert!(require_id(None, "invite").is_err());
    }
}
