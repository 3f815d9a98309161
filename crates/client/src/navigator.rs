//! Current route, history and the per-view cancellation scope.

use std::sync::{Mutex, MutexGuard, PoisonError};

use studio_core::capability::Capability;
use tokio_util::sync::CancellationToken;

use crate::guard::{Route, RouteGuard};

struct NavState {
    current: Route,
    history: Vec<Route>,
    scope: CancellationToken,
}

/// Owns the active route.
///
/// Each navigation cancels the previous view's [`CancellationToken`], so
/// responses still in flight for that view are discarded.
pub struct Navigator {
    state: Mutex<NavState>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(NavState {
                current: Route::Home,
                history: vec![Route::Home],
                scope: CancellationToken::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, NavState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Navigate to `requested`, subject to the route guard.
    ///
    /// Returns the route actually shown.
    pub fn navigate<C: Capability + ?Sized>(&self, viewer: &C, requested: Route) -> Route {
        let resolved = RouteGuard::resolve(viewer, requested);
        if resolved != requested {
            tracing::info!(%requested, %resolved, "Redirected by route guard");
        }

        let mut state = self.lock();
        state.scope.cancel();
        state.scope = CancellationToken::new();
        state.current = resolved;
        state.history.push(resolved);
        tracing::debug!(route = %resolved, "Navigated");
        resolved
    }

    pub fn current(&self) -> Route {
        self.lock().current
    }

    /// Every route shown so far, oldest first.
    pub fn history(&self) -> Vec<Route> {
        self.lock().history.clone()
    }

    /// Cancellation scope of the current view.
    pub fn scope(&self) -> CancellationToken {
        self.lock().scope.clone()
    }
}

#[cfg(test)]
mod tests {
    use studio_core::models::identity::Identity;

    use super::*;

    fn admin() -> Option<Identity> {
        Some(Identity {
            id: 1,
            username: "yoga@studio.com".into(),
            first_name: "Admin".into(),
            last_name: "Admin".into(),
            admin: true,
            token: None,
        })
    }

    #[test]
    fn starts_home() {
        let navigator = Navigator::new();
        assert_eq!(navigator.current(), Route::Home);
        assert!(!navigator.scope().is_cancelled());
    }

    #[test]
    fn navigation_cancels_previous_scope() {
        let navigator = Navigator::new();
        let first = navigator.scope();

        navigator.navigate(&admin(), Route::Sessions);

        assert!(first.is_cancelled());
        assert!(!navigator.scope().is_cancelled());
        assert_eq!(navigator.current(), Route::Sessions);
    }

    #[test]
    fn anonymous_navigation_is_redirected() {
        let navigator = Navigator::new();
        let anonymous: Option<Identity> = None;

        let shown = navigator.navigate(&anonymous, Route::SessionDetail(1));

        assert_eq!(shown, Route::Login);
        assert_eq!(navigator.history(), vec![Route::Home, Route::Login]);
    }
}
