//! Request extractors guarding the API.
//!
//! - [`auth::AuthUser`] -- the caller behind a valid bearer token.
//! - [`rbac::RequireAdmin`] -- same, restricted to admins.

pub mod auth;
pub mod rbac;
