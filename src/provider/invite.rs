//! `anthropic_invite` resource

use serde::{Deserialize, Serialize};

use crate::admin::{AdminClient, CreateInviteRequest, Invite, OrganizationRole};
use crate::provider::resource::{require_id, Resource, ResourceKind};
use crate::provider::Diagnostic;

/// Persisted state of an organization invite
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct InviteState {
    pub id: Option<String>,
    pub email: String,
    pub role: String,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub expires_at: Option<String>,
    pub inviter_id: Option<String>,
}

impl InviteState {
    fn refresh(&mut self, invite: &Invite) {
        self.email = invite.email.clone();
        self.role = invite.role.clone();
        self.status = Some(invite.status.clone());
        self.expires_at = Some(invite.expires_at.clone());
    }
}

pub struct InviteResource<'a> {
    client: &'a AdminClient,
}

impl<'a> InviteResource<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }
}

impl Resource for InviteResource<'_> {
    type State = InviteState;

    fn kind(&self) -> ResourceKind {
        ResourceKind::Invite
    }

    async fn create(&self, plan: &InviteState) -> Result<InviteState, Diagnostic> {
        let role = plan
            .role
            .parse::<OrganizationRole>()
            .map_err(|e| Diagnostic::invalid_attribute(&e))?;
        let request = CreateInviteRequest {
            email: plan.email.clone(),
            role,
        };
        let invite = self
            .client
            .create_invite(&request)
            .await
            .map_err(|e| Diagnostic::client_error("create invite", &e))?;

        let mut next = InviteState {
            id: Some(invite.id.clone()),
            created_at: Some(invite.created_at.clone()),
            inviter_id: invite.inviter_id().map(str::to_string),
            ..InviteState::default()
        };
        next.refresh(&invite);
        Ok(next)
    }

    async fn read(&self, state: &InviteState) -> Result<InviteState, Diagnostic> {
        let id = require_id(state.id.as_deref(), self.kind().label())?;
        let invite = self
            .client
            .get_invite(id)
            .await
            .map_err(|e| Diagnostic::client_error("read invite", &e))?;

        let mut next = state.clone();
        next.refresh(&invite);
        if let Some(inviter_id) = invite.inviter_id() {
            next.inviter_id = Some(inviter_id.to_string());
        }
        Ok(next)
    }

    async fn update(&self, _plan: &InviteState, _prior: &InviteState) -> Result<InviteState, Diagnostic> {
        Err(Diagnostic::error(
            "Update Not Supported",
            "Invites cannot be updated. Delete and recreate the invite with the new settings.",
        ))
    }

    async fn delete(&self, state: &InviteState) -> Result<(), Diagnostic> {
        let id = require_id(state.id.as_deref(), self.kind().label())?;
        self.client
            .delete_invite(id)
            .await
            .map_err(|e| Diagnostic::client_error("delete invite", &e))
    }

    fn import_state(&self, id: &str) -> Result<InviteState, Diagnostic> {
        Ok(InviteState {
            id: Some(id.to_string()),
            ..InviteState::default()
        })
    }
}
