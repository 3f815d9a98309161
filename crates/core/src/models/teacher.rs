//! Teacher entity model. Read-only from the client's side.

use serde::{Deserialize, Serialize};

use crate::types::{datetime, DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Teacher {
    /// Name as shown on a session's detail page, e.g. `Margot DELAHAYE`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
