//! The Roster Membership Controller.
//!
//! Tracks whether the viewer is on one session's roster and toggles it.
//! The visible state only changes once the service has confirmed the
//! change, and is then re-derived from the roster the service reports.

use std::sync::{Mutex, MutexGuard, PoisonError};

use studio_core::models::session::Session;
use studio_core::types::DbId;

use crate::affordance::Affordance;
use crate::directory::SessionDirectory;
use crate::error::{ClientError, ClientResult};

/// Membership as shown on the participation affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    NotMember,
    /// A participate/unparticipate call is in flight; the affordance is
    /// disabled.
    Pending,
    Member,
}

impl Membership {
    fn of(session: &Session, user_id: DbId) -> Self {
        if session.has_participant(user_id) {
            Membership::Member
        } else {
            Membership::NotMember
        }
    }
}

#[derive(Debug)]
struct Cell {
    state: Membership,
    /// Last state the service confirmed; restored when a call fails.
    confirmed: Membership,
    /// Latest known copy of the session.
    session: Session,
}

pub struct RosterMembershipController {
    directory: SessionDirectory,
    session_id: DbId,
    user_id: DbId,
    cell: Mutex<Cell>,
}

impl RosterMembershipController {
    /// Start from the roster in `session` as reported by the service.
    pub fn new(directory: SessionDirectory, session: &Session, user_id: DbId) -> Self {
        let state = Membership::of(session, user_id);
        Self {
            directory,
            session_id: session.id,
            user_id,
            cell: Mutex::new(Cell {
                state,
                confirmed: state,
                session: session.clone(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Cell> {
        self.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> Membership {
        self.lock().state
    }

    /// Label of the participation control. While pending it keeps the label
    /// of the last confirmed state.
    pub fn affordance(&self) -> Affordance {
        match self.lock().confirmed {
            Membership::Member => Affordance::DoNotParticipate,
            _ => Affordance::Participate,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.state() != Membership::Pending
    }

    /// Join the roster.
    pub async fn participate(&self) -> ClientResult<Session> {
        self.transition(Membership::Member).await
    }

    /// Leave the roster.
    pub async fn unparticipate(&self) -> ClientResult<Session> {
        self.transition(Membership::NotMember).await
    }

    /// Flip membership, whichever way the confirmed state points.
    pub async fn toggle(&self) -> ClientResult<Session> {
        let target = match self.lock().confirmed {
            Membership::Member => Membership::NotMember,
            _ => Membership::Member,
        };
        self.transition(target).await
    }

    async fn transition(&self, target: Membership) -> ClientResult<Session> {
        let pending = self.begin()?;

        let result = match target {
            Membership::Member => {
                self.directory
                    .participate(self.session_id, self.user_id)
                    .await
            }
            _ => {
                self.directory
                    .unparticipate(self.session_id, self.user_id)
                    .await
            }
        };

        if let Err(e) = result {
            tracing::warn!(
                session_id = self.session_id,
                user_id = self.user_id,
                error = %e,
                "Roster change rejected"
            );
            return Err(e);
        }

        // Confirmed. Server truth decides the new state; if it cannot be
        // read back, the confirmed target stands on the local copy.
        let session = match self.directory.get(self.session_id).await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(
                    session_id = self.session_id,
                    error = %e,
                    "Roster change confirmed but session reload failed"
                );
                self.patched(target)
            }
        };
        pending.settle(Membership::of(&session, self.user_id), &session);
        Ok(session)
    }

    /// The local copy with the viewer added or removed.
    fn patched(&self, target: Membership) -> Session {
        let mut session = self.lock().session.clone();
        if target == Membership::Member {
            session.users.insert(self.user_id);
        } else {
            session.users.remove(self.user_id);
        }
        session
    }

    /// Enter `Pending`, or fail with `Busy` if a call is already in flight.
    fn begin(&self) -> ClientResult<PendingCall<'_>> {
        let mut cell = self.lock();
        if cell.state == Membership::Pending {
            return Err(ClientError::Busy);
        }
        cell.state = Membership::Pending;
        Ok(PendingCall {
            controller: self,
            settled: false,
        })
    }
}

/// Restores the last confirmed state unless settled; this also covers the
/// call being dropped when its view is left.
struct PendingCall<'a> {
    controller: &'a RosterMembershipController,
    settled: bool,
}

impl std::fmt::Debug for PendingCall<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingCall")
            .field("settled", &self.settled)
            .finish_non_exhaustive()
    }
}

impl PendingCall<'_> {
    fn settle(mut self, state: Membership, session: &Session) {
        let mut cell = self.controller.lock();
        cell.state = state;
        cell.confirmed = state;
        cell.session = session.clone();
        self.settled = true;
    }
}

impl Drop for PendingCall<'_> {
    fn drop(&mut self) {
        if !self.settled {
            let mut cell = self.controller.lock();
            cell.state = cell.confirmed;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assert_matches::assert_matches;

    use super::*;
    use crate::auth::AuthSessionStore;
    use crate::config::ClientConfig;
    use crate::http::ApiClient;
    use crate::storage::MemoryStorage;

    fn session(users: &[DbId]) -> Session {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Morning Yoga",
            "description": "Start your day with yoga",
            "date": "2024-06-01T10:00:00",
            "teacher_id": 1,
            "users": users,
        }))
        .unwrap()
    }

    fn controller(users: &[DbId]) -> RosterMembershipController {
        // Port 9 (discard) refuses connections, so every call fails fast.
        let api = ApiClient::new(&ClientConfig::new("http://127.0.0.1:9")).unwrap();
        let auth = Arc::new(AuthSessionStore::new(
            api.clone(),
            Arc::new(MemoryStorage::new()),
        ));
        RosterMembershipController::new(SessionDirectory::new(api, auth), &session(users), 2)
    }

    #[test]
    fn initial_state_follows_roster() {
        let outside = controller(&[]);
        assert_eq!(outside.state(), Membership::NotMember);
        assert_eq!(outside.affordance(), Affordance::Participate);

        let inside = controller(&[2, 5]);
        assert_eq!(inside.state(), Membership::Member);
        assert_eq!(inside.affordance(), Affordance::DoNotParticipate);
    }

    #[test]
    fn second_call_while_pending_is_busy() {
        let controller = controller(&[]);
        let pending = controller.begin().unwrap();

        assert_eq!(controller.state(), Membership::Pending);
        assert!(!controller.is_enabled());
        assert_eq!(controller.affordance(), Affordance::Participate);
        assert_matches!(controller.begin(), Err(ClientError::Busy));

        drop(pending);
        assert_eq!(controller.state(), Membership::NotMember);
    }

    #[test]
    fn settle_updates_both_states() {
        let controller = controller(&[]);
        controller
            .begin()
            .unwrap()
            .settle(Membership::Member, &session(&[2]));

        assert_eq!(controller.state(), Membership::Member);
        assert_eq!(controller.affordance(), Affordance::DoNotParticipate);
    }

    #[tokio::test]
    async fn failed_call_keeps_prior_state() {
        let controller = controller(&[2]);

        let result = controller.toggle().await;

        assert_matches!(result, Err(ClientError::Http(_)));
        assert_eq!(controller.state(), Membership::Member);
        assert!(controller.is_enabled());
    }
}
