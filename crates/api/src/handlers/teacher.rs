//! Handlers for the `/teacher` resource (read-only).

use axum::extract::State;
use axum::Json;
use studio_core::error::CoreError;
use studio_core::models::teacher::Teacher;
use studio_core::types::DbId;
use studio_db::repositories::TeacherRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidPath;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/teacher
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<Teacher>>> {
    Ok(Json(TeacherRepo::list(&state.pool).await))
}

/// GET /api/teacher/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<Teacher>> {
    let teacher = TeacherRepo::find_by_id(&state.pool, id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Teacher",
            id,
        }))?;
    Ok(Json(teacher))
}
