//! Invites module - invite new users to the organization

mod api;
mod models;

pub use models::{CreateInviteRequest, Invite};
