//! Client routes and the guard deciding which of them a viewer may open.

use std::fmt;

use studio_core::capability::Capability;
use studio_core::types::DbId;

/// Every page of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Sessions,
    SessionCreate,
    SessionUpdate(DbId),
    SessionDetail(DbId),
    Me,
}

impl Route {
    /// Resolve a path. Anything unrecognised lands on [`Route::Home`].
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["sessions"] => Route::Sessions,
            ["sessions", "create"] => Route::SessionCreate,
            ["sessions", "update", id] => id.parse().map_or(Route::Home, Route::SessionUpdate),
            ["sessions", "detail", id] => id.parse().map_or(Route::Home, Route::SessionDetail),
            ["me"] => Route::Me,
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Sessions => "/sessions".to_string(),
            Route::SessionCreate => "/sessions/create".to_string(),
            Route::SessionUpdate(id) => format!("/sessions/update/{id}"),
            Route::SessionDetail(id) => format!("/sessions/detail/{id}"),
            Route::Me => "/me".to_string(),
        }
    }

    /// Routes reachable without signing in.
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Home | Route::Login | Route::Register)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Gatekeeper consulted before any view renders.
pub struct RouteGuard;

impl RouteGuard {
    /// The route actually rendered when `viewer` asks for `requested`.
    pub fn resolve<C: Capability + ?Sized>(viewer: &C, requested: Route) -> Route {
        if requested.is_public() || viewer.is_authenticated() {
            requested
        } else {
            Route::Login
        }
    }

    /// Whether `viewer` may stay on `current`.
    pub fn permits<C: Capability + ?Sized>(viewer: &C, current: Route) -> bool {
        Self::resolve(viewer, current) == current
    }
}
