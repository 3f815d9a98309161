//! Handlers for the `/user` resource (profile page).

use axum::extract::State;
use axum::Json;
use studio_core::error::CoreError;
use studio_core::models::user::User;
use studio_core::types::DbId;
use studio_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidPath;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "User", id })
}

/// GET /api/user/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await
        .ok_or_else(|| not_found(id))?;
    Ok(Json(user.to_public()))
}

/// DELETE /api/user/{id}
///
/// Users may only delete their own account; anyone else gets 401.
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<()> {
    if UserRepo::find_by_id(&state.pool, id).await.is_none() {
        return Err(not_found(id));
    }
    if auth_user.user_id != id {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Cannot delete another user's account".into(),
        )));
    }

    UserRepo::delete(&state.pool, id).await;
    tracing::info!(user_id = id, "Account deleted");
    Ok(())
}
