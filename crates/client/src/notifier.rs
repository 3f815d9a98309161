//! Transient notifications ("snackbar" messages).

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Label of the dismiss action attached to every notice.
pub const NOTICE_ACTION: &str = "Close";
/// How long a notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_millis(3000);

pub const SESSION_CREATED: &str = "Session created !";
pub const SESSION_UPDATED: &str = "Session updated !";
pub const SESSION_DELETED: &str = "Session deleted !";
pub const ACCOUNT_DELETED: &str = "Your account has been deleted !";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub action: &'static str,
    pub duration: Duration,
}

/// Records every notice shown, most recent last.
#[derive(Debug, Default)]
pub struct Notifier {
    shown: Mutex<Vec<Notice>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&self, message: impl Into<String>) {
        let notice = Notice {
            message: message.into(),
            action: NOTICE_ACTION,
            duration: NOTICE_DURATION,
        };
        tracing::debug!(message = %notice.message, "Notice shown");
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }

    pub fn latest(&self) -> Option<Notice> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn history(&self) -> Vec<Notice> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
