//! Organization users module - list, re-role and remove organization members

mod api;
mod models;

pub use models::{OrganizationRole, OrganizationUser, UpdateOrganizationUserRequest};
