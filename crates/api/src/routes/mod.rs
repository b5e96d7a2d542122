pub mod comment;
pub mod health;
pub mod member;
pub mod post;
pub mod reply;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /members/signup                       signup (public)
/// /members/login                        login (public)
/// /members/logout                       logout
/// /members/refresh                      reissue access token
/// /members/mypage/written               caller's posts/comments/replies
/// /members/mypage/liked                 caller's liked content
///
/// /posts                                list (public), create
/// /posts/{id}                           get (public), update, delete
/// /posts/{id}/comments                  list (public), create
/// /posts/{id}/like                      toggle
///
/// /comments/{id}                        update, delete
/// /comments/{id}/replies                list (public), create
/// /comments/{id}/like                   toggle
///
/// /replies/{id}                         update, delete
/// /replies/{id}/like                    toggle
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/members", member::router())
        .nest("/posts", post::router())
        .nest("/comments", comment::router())
        .nest("/replies", reply::router())
}
