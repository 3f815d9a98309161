//! Route definitions for the `/teacher` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::teacher;
use crate::state::AppState;

/// Routes mounted at `/teacher`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(teacher::list))
        .route("/{id}", get(teacher::get_by_id))
}
