//! Route definitions for the `/session` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

/// Routes mounted at `/session`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(session::list).post(session::create))
        .route(
            "/{id}",
            get(session::get_by_id)
                .put(session::update)
                .delete(session::delete),
        )
        .route(
            "/{id}/participate/{user_id}",
            post(session::participate).delete(session::no_longer_participate),
        )
}
