//! Invite API operations

use log::debug;

use crate::admin::helpers::{org_path, QueryBuilder};
use crate::admin::traits::{ListParams, ListResponse};
use crate::admin::AdminClient;
use crate::config::api;
use crate::error::Result;

use super::models::{CreateInviteRequest, Invite};

impl AdminClient {
    /// List one page of invites
    pub async fn list_invites(&self, params: &ListParams) -> Result<ListResponse<Invite>> {
        let path = QueryBuilder::from_params(params).finish(&org_path(&[api::INVITES]));
        self.get_json(&path).await
    }

    /// Get an invite by ID
    pub async fn get_invite(&self, invite_id: &str) -> Result<Invite> {
        debug!("Fetching invite {}", invite_id);
        self.get_json(&org_path(&[api::INVITES, invite_id])).await
    }

    /// Invite a user to the organization
    pub async fn create_invite(&self, request: &CreateInviteRequest) -> Result<Invite> {
        debug!("Inviting {} as {}", request.email, request.role);
        let invite: Invite = self.post_json(&org_path(&[api::INVITES]), request).await?;
        debug!("Created invite {} (status: {})", invite.id, invite.status);
        Ok(invite)
    }

    /// Cancel an invite
    pub async fn delete_invite(&self, invite_id: &str) -> Result<()> {
        debug!("Deleting invite {}", invite_id);
        self.delete(&org_path(&[api::INVITES, invite_id])).await
    }
}
