//! Handlers for the `/auth` resource (login, register).

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use studio_core::error::CoreError;
use studio_core::forms::{LoginForm, RegisterForm};
use studio_core::models::MessageResponse;
use studio_core::types::DbId;
use studio_db::models::user::CreateUser;
use studio_db::repositories::UserRepo;
use studio_db::DbError;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::state::AppState;

/// Message returned when the email of a registration is already in use.
pub const EMAIL_TAKEN: &str = "Error: Email is already taken!";

/// Successful login response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: &'static str,
    pub id: DbId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
}

fn bad_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Bad credentials".into()))
}

/// POST /api/auth/login
///
/// Authenticate with email + password. Returns a bearer token and the
/// identity the client keeps for the rest of its session.
pub async fn login(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<LoginForm>,
) -> AppResult<Json<JwtResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await
        .ok_or_else(bad_credentials)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = user.id, "Rejected login with wrong password");
        return Err(bad_credentials());
    }

    let token = state
        .config
        .jwt
        .issue(user.id, &user.email, user.admin)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, admin = user.admin, "User logged in");

    Ok(Json(JwtResponse {
        token,
        token_type: "Bearer",
        id: user.id,
        username: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        admin: user.admin,
    }))
}

/// POST /api/auth/register
///
/// Create a non-admin account. A taken email answers 400 with
/// [`EMAIL_TAKEN`].
pub async fn register(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<RegisterForm>,
) -> AppResult<Json<MessageResponse>> {
    if UserRepo::exists_by_email(&state.pool, &input.email).await {
        return Err(AppError::BadRequest(EMAIL_TAKEN.into()));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let created = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            password_hash,
            admin: false,
        },
    )
    .await;

    match created {
        Ok(user) => {
            tracing::info!(user_id = user.id, "User registered");
            Ok(Json(MessageResponse::new("User registered successfully!")))
        }
        // Lost a race with a concurrent registration of the same email.
        Err(DbError::UniqueViolation { .. }) => Err(AppError::BadRequest(EMAIL_TAKEN.into())),
    }
}
