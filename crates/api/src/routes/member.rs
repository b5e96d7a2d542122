//! Route definitions for the `/members` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::member;
use crate::state::AppState;

/// Routes mounted at `/members`.
///
/// ```text
/// POST /signup              -> signup
/// POST /login               -> login
/// POST /logout              -> logout
/// POST /refresh             -> refresh
/// GET  /mypage/written      -> mypage_written
/// GET  /mypage/liked        -> mypage_liked
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(member::signup))
        .route("/login", post(member::login))
        .route("/logout", post(member::logout))
        .route("/refresh", post(member::refresh))
        .route("/mypage/written", get(member::mypage_written))
        .route("/mypage/liked", get(member::mypage_liked))
}
