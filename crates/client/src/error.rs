use reqwest::StatusCode;
use studio_core::error::CoreError;

/// Failures surfaced by the client state model.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The login endpoint rejected the credentials.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// An authenticated call was rejected; the session is over.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A form failed local validation. No request was sent.
    #[error("Invalid fields: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The service refused the change, e.g. an email already in use.
    #[error("{0}")]
    Conflict(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The affordance already has a call in flight.
    #[error("Another request is already in flight")]
    Busy,

    /// The response belongs to a view the user has left.
    #[error("Response discarded: the view is no longer active")]
    Stale,

    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-2xx status not covered above.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Map an unsuccessful response status and its message to an error.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            _ => ClientError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { entity, id } => {
                ClientError::NotFound(format!("{entity} with id {id}"))
            }
            CoreError::Validation(msg) => ClientError::Validation(msg),
            CoreError::Conflict(msg) => ClientError::Conflict(msg),
            CoreError::Unauthorized(msg) => ClientError::Unauthorized(msg),
            CoreError::Forbidden(msg) => ClientError::Forbidden(msg),
            CoreError::Internal(msg) => ClientError::Api {
                status: 500,
                message: msg,
            },
        }
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ClientError::Validation(studio_core::forms::describe(&errors))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn statuses_map_to_taxonomy() {
        assert_matches!(
            ClientError::from_status(StatusCode::UNAUTHORIZED, "x".into()),
            ClientError::Unauthorized(_)
        );
        assert_matches!(
            ClientError::from_status(StatusCode::NOT_FOUND, "x".into()),
            ClientError::NotFound(_)
        );
        let err = ClientError::from_status(StatusCode::BAD_REQUEST, "taken".into());
        assert_matches!(err, ClientError::Api { status: 400, message } if message == "taken");
    }

    #[test]
    fn core_not_found_keeps_entity() {
        let err = ClientError::from(CoreError::NotFound {
            entity: "Teacher",
            id: 3,
        });
        assert_eq!(err.to_string(), "Not found: Teacher with id 3");
    }
}
