//! Repository for the `sessions` table and its roster join.

use studio_core::models::roster::Roster;
use studio_core::models::session::{Session, SessionPayload};
use studio_core::types::DbId;

use crate::{now, DbPool};

/// Outcome of a roster change on an existing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Participation {
    /// The roster changed.
    Changed,
    /// The roster already had the requested shape.
    Unchanged,
}

/// Provides CRUD and roster operations for sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session with an empty roster.
    pub async fn create(pool: &DbPool, input: &SessionPayload) -> Session {
        let mut tables = pool.tables.write().await;
        let id = tables.session_seq.advance();
        let stamp = now();
        let session = Session {
            id,
            name: input.name.clone(),
            description: input.description.clone(),
            date: input.date.and_time(chrono::NaiveTime::default()),
            teacher_id: input.teacher_id,
            users: Roster::new(),
            created_at: Some(stamp),
            updated_at: Some(stamp),
        };
        tables.sessions.insert(id, session.clone());
        session
    }

    /// All sessions ordered by id.
    pub async fn list(pool: &DbPool) -> Vec<Session> {
        pool.tables.read().await.sessions.values().cloned().collect()
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Option<Session> {
        pool.tables.read().await.sessions.get(&id).cloned()
    }

    /// Replace the editable fields of a session, keeping its roster and
    /// creation time.
    ///
    /// Returns `None` if no session with the given `id` exists.
    pub async fn update(pool: &DbPool, id: DbId, input: &SessionPayload) -> Option<Session> {
        let mut tables = pool.tables.write().await;
        let session = tables.sessions.get_mut(&id)?;
        session.name = input.name.clone();
        session.description = input.description.clone();
        session.date = input.date.and_time(chrono::NaiveTime::default());
        session.teacher_id = input.teacher_id;
        session.updated_at = Some(now());
        Some(session.clone())
    }

    /// Returns `true` if the row existed.
    pub async fn delete(pool: &DbPool, id: DbId) -> bool {
        pool.tables.write().await.sessions.remove(&id).is_some()
    }

    /// Add a user to a session's roster.
    ///
    /// Returns `None` if the session does not exist.
    pub async fn add_participant(
        pool: &DbPool,
        id: DbId,
        user_id: DbId,
    ) -> Option<Participation> {
        let mut tables = pool.tables.write().await;
        let session = tables.sessions.get_mut(&id)?;
        Some(Self::touch(session, |roster| roster.insert(user_id)))
    }

    /// Remove a user from a session's roster.
    ///
    /// Returns `None` if the session does not exist.
    pub async fn remove_participant(
        pool: &DbPool,
        id: DbId,
        user_id: DbId,
    ) -> Option<Participation> {
        let mut tables = pool.tables.write().await;
        let session = tables.sessions.get_mut(&id)?;
        Some(Self::touch(session, |roster| roster.remove(user_id)))
    }

    fn touch(session: &mut Session, change: impl FnOnce(&mut Roster) -> bool) -> Participation {
        if change(&mut session.users) {
            session.updated_at = Some(now());
            Participation::Changed
        } else {
            Participation::Unchanged
        }
    }
}
