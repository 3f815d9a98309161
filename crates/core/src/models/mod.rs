//! Wire models shared by the client and the service.
//!
//! Field names follow the JSON the service speaks: camelCase, except
//! `teacher_id` which keeps its underscore.

pub mod identity;
pub mod roster;
pub mod session;
pub mod teacher;
pub mod user;

use serde::{Deserialize, Serialize};

/// `{ "message": ... }` body used by register and by error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
