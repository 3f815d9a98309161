//! Handlers for the `/session` resource and its roster.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use studio_core::capability::Capability;
use studio_core::error::CoreError;
use studio_core::models::session::{Session, SessionPayload};
use studio_core::types::DbId;
use studio_db::repositories::{Participation, SessionRepo, TeacherRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ValidJson, ValidPath};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Session",
        id,
    })
}

/// A session must reference an existing teacher.
async fn ensure_teacher(state: &AppState, teacher_id: DbId) -> AppResult<()> {
    if TeacherRepo::exists(&state.pool, teacher_id).await {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Teacher with id {teacher_id} does not exist"
        )))
    }
}

/// Non-admins may only change their own roster entry.
fn ensure_self_or_admin(user: &AuthUser, user_id: DbId) -> AppResult<()> {
    if user.is_admin() || user.viewer_id() == Some(user_id) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "Cannot change another user's participation".into(),
        )))
    }
}

/// GET /api/session
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<Session>>> {
    Ok(Json(SessionRepo::list(&state.pool).await))
}

/// GET /api/session/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<Session>> {
    let session = SessionRepo::find_by_id(&state.pool, id)
        .await
        .ok_or_else(|| not_found(id))?;
    Ok(Json(session))
}

/// POST /api/session
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidJson(input): ValidJson<SessionPayload>,
) -> AppResult<(StatusCode, Json<Session>)> {
    ensure_teacher(&state, input.teacher_id).await?;
    let session = SessionRepo::create(&state.pool, &input).await;
    tracing::info!(session_id = session.id, admin_id = admin.user_id, "Session created");
    Ok((StatusCode::CREATED, Json(session)))
}

/// PUT /api/session/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidPath(id): ValidPath<DbId>,
    ValidJson(input): ValidJson<SessionPayload>,
) -> AppResult<Json<Session>> {
    if SessionRepo::find_by_id(&state.pool, id).await.is_none() {
        return Err(not_found(id));
    }
    ensure_teacher(&state, input.teacher_id).await?;

    let session = SessionRepo::update(&state.pool, id, &input)
        .await
        .ok_or_else(|| not_found(id))?;
    tracing::info!(session_id = id, admin_id = admin.user_id, "Session updated");
    Ok(Json(session))
}

/// DELETE /api/session/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<()> {
    if !SessionRepo::delete(&state.pool, id).await {
        return Err(not_found(id));
    }
    tracing::info!(session_id = id, admin_id = admin.user_id, "Session deleted");
    Ok(())
}

/// POST /api/session/{id}/participate/{user_id}
///
/// 404 if the session or user is missing, 400 if already participating.
pub async fn participate(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidPath((id, user_id)): ValidPath<(DbId, DbId)>,
) -> AppResult<()> {
    ensure_self_or_admin(&auth_user, user_id)?;
    if UserRepo::find_by_id(&state.pool, user_id).await.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }));
    }

    match SessionRepo::add_participant(&state.pool, id, user_id).await {
        None => Err(not_found(id)),
        Some(Participation::Unchanged) => Err(AppError::BadRequest(format!(
            "User {user_id} already participates in session {id}"
        ))),
        Some(Participation::Changed) => {
            tracing::info!(session_id = id, user_id, "User joined session");
            Ok(())
        }
    }
}

/// DELETE /api/session/{id}/participate/{user_id}
///
/// Idempotent: leaving a session one is not part of still answers 200.
pub async fn no_longer_participate(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidPath((id, user_id)): ValidPath<(DbId, DbId)>,
) -> AppResult<()> {
    ensure_self_or_admin(&auth_user, user_id)?;
    match SessionRepo::remove_participant(&state.pool, id, user_id).await {
        None => Err(not_found(id)),
        Some(change) => {
            tracing::info!(session_id = id, user_id, ?change, "User left session");
            Ok(())
        }
    }
}
