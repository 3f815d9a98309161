//! User entity model and DTOs.

use studio_core::models::user::User;
use studio_core::types::{DbId, Timestamp};

/// Full user row.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserRow::to_public`] for external-facing output.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: DbId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub admin: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserRow {
    pub fn to_public(&self) -> User {
        User {
            id: self.id,
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            admin: self.admin,
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub admin: bool,
}
