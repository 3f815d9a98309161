//! The authenticated identity returned by `POST /api/auth/login`.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Who is signed in, as reported by the login endpoint.
///
/// `username` holds the account email. `token` is opaque to the client; some
/// deployments omit it, in which case nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: DbId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_login_response_without_token() {
        let json = serde_json::json!({
            "id": 1,
            "username": "yoga@studio.com",
            "firstName": "John",
            "lastName": "Doe",
            "admin": false,
        });
        let identity: Identity = serde_json::from_value(json).unwrap();
        assert_eq!(identity.id, 1);
        assert!(!identity.admin);
        assert!(identity.token.is_none());
        assert_eq!(identity.first_name, "John");
    }

    #[test]
    fn ignores_extra_response_fields() {
        let json = serde_json::json!({
            "id": 2,
            "username": "user@studio.com",
            "firstName": "John",
            "lastName": "User",
            "admin": false,
            "token": "fake-jwt-token",
            "type": "Bearer",
        });
        let identity: Identity = serde_json::from_value(json).unwrap();
        assert_eq!(identity.token.as_deref(), Some("fake-jwt-token"));
    }
}
