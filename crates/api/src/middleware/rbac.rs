//! Admin-only extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use studio_core::capability::Capability;
use studio_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// An [`AuthUser`] holding the admin flag. Others get 403.
///
/// Session create, update and delete take this instead of [`AuthUser`].
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.is_admin() {
            Ok(RequireAdmin(user))
        } else {
            tracing::info!(user_id = user.user_id, "Refused admin-only request");
            Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )))
        }
    }
}
