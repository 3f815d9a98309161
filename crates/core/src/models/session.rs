//! Yoga session entity and its create/update payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::roster::Roster;
use crate::types::{datetime, DbId, Timestamp};

/// A scheduled session as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: DbId,
    pub name: String,
    pub description: String,
    #[serde(with = "datetime")]
    pub date: Timestamp,
    #[serde(rename = "teacher_id")]
    pub teacher_id: DbId,
    #[serde(default)]
    pub users: Roster,
    #[serde(default, with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Session {
    pub fn has_participant(&self, user_id: DbId) -> bool {
        self.users.contains(user_id)
    }
}

/// Body of `POST /api/session` and `PUT /api/session/{id}`.
///
/// Serializes to exactly `name`, `date`, `teacher_id` and `description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SessionPayload {
    #[validate(length(min = 1, max = 50, message = "name is required"))]
    pub name: String,
    #[serde(with = "datetime::date")]
    pub date: NaiveDate,
    pub teacher_id: DbId,
    #[validate(length(min = 1, max = 2500, message = "description is required"))]
    pub description: String,
}
