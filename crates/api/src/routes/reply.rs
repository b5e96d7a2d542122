//! Route definitions for the `/replies` resource.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::{like, reply};
use crate::state::AppState;

/// Routes mounted at `/replies`.
///
/// ```text
/// PUT    /{id}              -> update_reply
/// DELETE /{id}              -> delete_reply
/// POST   /{id}/like         -> toggle_reply_like
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            put(reply::update_reply).delete(reply::delete_reply),
        )
        .route("/{id}/like", post(like::toggle_reply_like))
}
