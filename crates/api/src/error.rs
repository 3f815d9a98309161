use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use studio_core::error::CoreError;
use studio_db::DbError;

/// Error type returned by every handler.
///
/// Domain failures arrive as [`CoreError`]; the rest are HTTP-level. Every
/// variant renders as `{ "message": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// 400 with the message shown to the user as-is.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 500; the message is logged, never sent.
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::from(errors))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    code: &'static str,
}

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Core(CoreError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            AppError::Core(CoreError::Conflict(_)) | AppError::Database(_) => {
                (StatusCode::CONFLICT, "CONFLICT")
            }
            AppError::Core(CoreError::Unauthorized(_)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
            }
            AppError::Core(CoreError::Forbidden(_)) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::Core(CoreError::Internal(_)) | AppError::InternalError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }

    /// Text placed in the response body.
    fn public_message(&self) -> String {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                format!("{entity} with id {id} not found")
            }
            AppError::Core(CoreError::Validation(fields)) => format!("Invalid fields: {fields}"),
            AppError::Core(
                CoreError::Conflict(msg) | CoreError::Unauthorized(msg) | CoreError::Forbidden(msg),
            )
            | AppError::BadRequest(msg) => msg.clone(),
            AppError::Database(err) => err.to_string(),
            AppError::Core(CoreError::Internal(_)) | AppError::InternalError(_) => {
                INTERNAL_MESSAGE.to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            message: self.public_message(),
            code,
        };
        (status, axum::Json(body)).into_response()
    }
}
