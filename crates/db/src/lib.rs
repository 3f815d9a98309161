//! In-memory storage for the studio service.
//!
//! Tables live behind a single async `RwLock`; repositories are stateless
//! unit structs taking the pool by reference. Nothing is durable: the data
//! set is rebuilt on every start.

pub mod models;
pub mod repositories;

use std::collections::BTreeMap;
use std::sync::Arc;

use studio_core::models::session::Session;
use studio_core::models::teacher::Teacher;
use studio_core::types::{DbId, Timestamp};
use tokio::sync::RwLock;

use crate::models::user::UserRow;

/// Shared handle to the store; cheap to clone.
pub type DbPool = Arc<Store>;

/// Storage-layer failures.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A uniqueness rule was violated; `constraint` names the rule.
    #[error("Duplicate value violates unique constraint: {constraint}")]
    UniqueViolation { constraint: &'static str },
}

#[derive(Default)]
pub(crate) struct Tables {
    pub(crate) users: BTreeMap<DbId, UserRow>,
    pub(crate) teachers: BTreeMap<DbId, Teacher>,
    pub(crate) sessions: BTreeMap<DbId, Session>,
    pub(crate) user_seq: Sequence,
    pub(crate) teacher_seq: Sequence,
    pub(crate) session_seq: Sequence,
}

/// Per-table id sequence starting at 1. Ids are never reused.
#[derive(Default)]
pub(crate) struct Sequence(DbId);

impl Sequence {
    pub(crate) fn advance(&mut self) -> DbId {
        self.0 += 1;
        self.0
    }
}

/// The in-memory database.
#[derive(Default)]
pub struct Store {
    pub(crate) tables: RwLock<Tables>,
}

/// Create an empty store.
pub fn create_pool() -> DbPool {
    Arc::new(Store::default())
}

/// Cheap liveness probe, mirroring what a real pool would offer.
pub async fn health_check(pool: &DbPool) -> Result<(), DbError> {
    let tables = pool.tables.read().await;
    tracing::trace!(
        users = tables.users.len(),
        teachers = tables.teachers.len(),
        sessions = tables.sessions.len(),
        "Store health check"
    );
    Ok(())
}

/// Current wall-clock time as stored in audit columns.
pub(crate) fn now() -> Timestamp {
    chrono::Local::now().naive_local()
}
