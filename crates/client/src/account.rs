//! The viewer's own account (`/api/user`).

use std::sync::Arc;

use studio_core::capability::Capability;
use studio_core::models::user::User;

use crate::auth::AuthSessionStore;
use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;

#[derive(Clone)]
pub struct AccountClient {
    api: ApiClient,
    auth: Arc<AuthSessionStore>,
}

impl AccountClient {
    pub fn new(api: ApiClient, auth: Arc<AuthSessionStore>) -> Self {
        Self { api, auth }
    }

    /// Profile of the signed-in user.
    pub async fn me(&self) -> ClientResult<User> {
        let id = self.viewer_id()?;
        let token = self.auth.token();
        self.api
            .get_json(&format!("/api/user/{id}"), token.as_deref())
            .await
    }

    /// Delete the signed-in user's account. The caller signs out afterwards.
    pub async fn delete_me(&self) -> ClientResult<()> {
        let id = self.viewer_id()?;
        let token = self.auth.token();
        self.api
            .delete(&format!("/api/user/{id}"), token.as_deref())
            .await?;
        tracing::info!(user_id = id, "Account deleted");
        Ok(())
    }

    fn viewer_id(&self) -> ClientResult<studio_core::types::DbId> {
        self.auth
            .viewer_id()
            .ok_or_else(|| ClientError::Unauthorized("Not signed in".into()))
    }
}
