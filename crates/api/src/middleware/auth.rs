//! Bearer-token authentication for handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use studio_core::capability::Capability;
use studio_core::error::CoreError;
use studio_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// The caller, as proven by the `Authorization: Bearer <token>` header.
///
/// Taking this extractor makes a handler answer 401 to anonymous callers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub admin: bool,
}

impl Capability for AuthUser {
    fn viewer_id(&self) -> Option<DbId> {
        Some(self.user_id)
    }

    fn is_admin(&self) -> bool {
        self.admin
    }
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.into()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| unauthorized("Expected: Bearer <token>"))?;

        let claims = state.config.jwt.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            unauthorized("Invalid or expired token")
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            admin: claims.admin,
        })
    }
}
