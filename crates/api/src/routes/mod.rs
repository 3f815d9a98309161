pub mod auth;
pub mod health;
pub mod session;
pub mod teacher;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                  login (public)
/// /auth/register                               register (public)
///
/// /session                                     list, create (admin)
/// /session/{id}                                get, update (admin), delete (admin)
/// /session/{id}/participate/{user_id}          join (POST), leave (DELETE)
///
/// /teacher                                     list
/// /teacher/{id}                                get
///
/// /user/{id}                                   get, delete (self only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/session", session::router())
        .nest("/teacher", teacher::router())
        .nest("/user", user::router())
}
