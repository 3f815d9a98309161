//! Repository for the `users` table.

use studio_core::types::DbId;

use crate::models::user::{CreateUser, UserRow};
use crate::{now, DbError, DbPool};

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Emails are unique (compared case-insensitively).
    pub async fn create(pool: &DbPool, input: &CreateUser) -> Result<UserRow, DbError> {
        let mut tables = pool.tables.write().await;
        let taken = tables
            .users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&input.email));
        if taken {
            return Err(DbError::UniqueViolation {
                constraint: "uq_users_email",
            });
        }

        let id = tables.user_seq.advance();
        let stamp = now();
        let row = UserRow {
            id,
            email: input.email.clone(),
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            password_hash: input.password_hash.clone(),
            admin: input.admin,
            created_at: stamp,
            updated_at: stamp,
        };
        tables.users.insert(id, row.clone());
        Ok(row)
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Option<UserRow> {
        pool.tables.read().await.users.get(&id).cloned()
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(pool: &DbPool, email: &str) -> Option<UserRow> {
        pool.tables
            .read()
            .await
            .users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    pub async fn exists_by_email(pool: &DbPool, email: &str) -> bool {
        Self::find_by_email(pool, email).await.is_some()
    }

    /// Delete a user and drop them from every session roster.
    ///
    /// Returns `true` if the row existed.
    pub async fn delete(pool: &DbPool, id: DbId) -> bool {
        let mut tables = pool.tables.write().await;
        if tables.users.remove(&id).is_none() {
            return false;
        }
        for session in tables.sessions.values_mut() {
            session.users.remove(id);
        }
        true
    }
}
