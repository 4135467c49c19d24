//! Organization user API operations

use log::debug;

use crate::admin::helpers::{org_path, QueryBuilder};
use crate::admin::traits::{ListParams, ListResponse};
use crate::admin::AdminClient;
use crate::config::api;
use crate::error::Result;

use super::models::{OrganizationUser, UpdateOrganizationUserRequest};

impl AdminClient {
    /// List one page of organization users
    pub async fn list_organization_users(
        &self,
        params: &ListParams,
    ) -> Result<ListResponse<OrganizationUser>> {
        let path = QueryBuilder::from_params(params).finish(&org_path(&[api::USERS]));
        self.get_json(&path).await
    }

    /// Get an organization user by ID
    pub async fn get_organization_user(&self, user_id: &str) -> Result<OrganizationUser> {
        debug!("Fetching organization user {}", user_id);
        self.get_json(&org_path(&[api::USERS, user_id])).await
    }

    /// Change a user's organization role
    pub async fn update_organization_user(
        &self,
        user_id: &str,
        request: &UpdateOrganizationUserRequest,
    ) -> Result<OrganizationUser> {
        debug!("Setting organization role of {} to {}", user_id, request.role);
        self.post_json(&org_path(&[api::USERS, user_id]), request)
            .await
    }

    /// Remove a user from the organization
    pub async fn remove_organization_user(&self, user_id: &str) -> Result<()> {
        debug!("Removing organization user {}", user_id);
        self.delete(&org_path(&[api::USERS, user_id])).await
    }
}
