//! Account profile as served by `GET /api/user/{id}`.

use serde::{Deserialize, Serialize};

use crate::types::{datetime, DbId, Timestamp};

/// Public view of an account. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
    #[serde(default, with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}
