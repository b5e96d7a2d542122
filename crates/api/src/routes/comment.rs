//! Route definitions for the `/comments` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{comment, like, reply};
use crate::state::AppState;

/// Routes mounted at `/comments`.
///
/// ```text
/// PUT    /{id}              -> update_comment
/// DELETE /{id}              -> delete_comment
/// GET    /{id}/replies      -> list_replies (public)
/// POST   /{id}/replies      -> create_reply
/// POST   /{id}/like         -> toggle_comment_like
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            put(comment::update_comment).delete(comment::delete_comment),
        )
        .route(
            "/{id}/replies",
            get(reply::list_replies).post(reply::create_reply),
        )
        .route("/{id}/like", post(like::toggle_comment_like))
}
