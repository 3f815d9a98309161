//! The Session Directory Client: sessions and teachers over HTTP.
//!
//! Nothing is cached; every call reflects the service's current state.

use std::sync::Arc;

use studio_core::capability::Capability;
use studio_core::models::session::{Session, SessionPayload};
use studio_core::models::teacher::Teacher;
use studio_core::types::DbId;
use validator::Validate;

use crate::auth::AuthSessionStore;
use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;

/// A session together with the teacher leading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDetail {
    pub session: Session,
    pub teacher: Teacher,
}

#[derive(Clone)]
pub struct SessionDirectory {
    api: ApiClient,
    auth: Arc<AuthSessionStore>,
}

impl SessionDirectory {
    pub fn new(api: ApiClient, auth: Arc<AuthSessionStore>) -> Self {
        Self { api, auth }
    }

    /// All sessions. An empty list is a valid answer.
    pub async fn list(&self) -> ClientResult<Vec<Session>> {
        let token = self.auth.token();
        self.api.get_json("/api/session", token.as_deref()).await
    }

    pub async fn get(&self, id: DbId) -> ClientResult<Session> {
        let token = self.auth.token();
        self.api
            .get_json(&format!("/api/session/{id}"), token.as_deref())
            .await
    }

    /// The session and its teacher; `NotFound` if either is missing.
    pub async fn detail(&self, id: DbId) -> ClientResult<SessionDetail> {
        let session = self.get(id).await?;
        let teacher = self.teacher(session.teacher_id).await?;
        Ok(SessionDetail { session, teacher })
    }

    pub async fn create(&self, payload: &SessionPayload) -> ClientResult<Session> {
        self.ensure_admin()?;
        payload.validate()?;

        let token = self.auth.token();
        let session: Session = self
            .api
            .post_json("/api/session", token.as_deref(), payload)
            .await?;
        tracing::info!(session_id = session.id, "Session created");
        Ok(session)
    }

    pub async fn update(&self, id: DbId, payload: &SessionPayload) -> ClientResult<Session> {
        self.ensure_admin()?;
        payload.validate()?;

        let token = self.auth.token();
        let session: Session = self
            .api
            .put_json(&format!("/api/session/{id}"), token.as_deref(), payload)
            .await?;
        tracing::info!(session_id = id, "Session updated");
        Ok(session)
    }

    pub async fn delete(&self, id: DbId) -> ClientResult<()> {
        self.ensure_admin()?;

        let token = self.auth.token();
        self.api
            .delete(&format!("/api/session/{id}"), token.as_deref())
            .await?;
        tracing::info!(session_id = id, "Session deleted");
        Ok(())
    }

    pub async fn participate(&self, id: DbId, user_id: DbId) -> ClientResult<()> {
        let token = self.auth.token();
        self.api
            .post_empty(&participation_path(id, user_id), token.as_deref())
            .await
    }

    pub async fn unparticipate(&self, id: DbId, user_id: DbId) -> ClientResult<()> {
        let token = self.auth.token();
        self.api
            .delete(&participation_path(id, user_id), token.as_deref())
            .await
    }

    pub async fn teachers(&self) -> ClientResult<Vec<Teacher>> {
        let token = self.auth.token();
        self.api.get_json("/api/teacher", token.as_deref()).await
    }

    pub async fn teacher(&self, id: DbId) -> ClientResult<Teacher> {
        let token = self.auth.token();
        self.api
            .get_json(&format!("/api/teacher/{id}"), token.as_deref())
            .await
    }

    /// Mutations are refused locally for non-admins.
    fn ensure_admin(&self) -> ClientResult<()> {
        if self.auth.is_admin() {
            Ok(())
        } else {
            Err(ClientError::Forbidden("Admin role required".into()))
        }
    }
}

fn participation_path(id: DbId, user_id: DbId) -> String {
    format!("/api/session/{id}/participate/{user_id}")
}
