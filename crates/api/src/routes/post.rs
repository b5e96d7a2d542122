//! Route definitions for the `/posts` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{comment, like, post as post_handlers};
use crate::state::AppState;

/// Routes mounted at `/posts`.
///
/// ```text
/// GET    /                  -> list_posts (public)
/// POST   /                  -> create_post
/// GET    /{id}              -> get_post (public)
/// PUT    /{id}              -> update_post
/// DELETE /{id}              -> delete_post
/// GET    /{id}/comments     -> list_comments (public)
/// POST   /{id}/comments     -> create_comment
/// POST   /{id}/like         -> toggle_post_like
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(post_handlers::list_posts).post(post_handlers::create_post),
        )
        .route(
            "/{id}",
            get(post_handlers::get_post)
                .put(post_handlers::update_post)
                .delete(post_handlers::delete_post),
        )
        .route(
            "/{id}/comments",
            get(comment::list_comments).post(comment::create_comment),
        )
        .route("/{id}/like", post(like::toggle_post_like))
}
