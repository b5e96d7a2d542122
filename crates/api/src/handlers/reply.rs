//! Handlers for replies (created under a comment, mutated by id).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use agora_core::error::CoreError;
use agora_core::ownership::ensure_owner;
use agora_core::types::DbId;
use agora_core::validation::validate_content;
use agora_db::models::reply::Reply;
use agora_db::repositories::ReplyRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::comment::ensure_comment_exists;
use crate::middleware::auth::AuthMember;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for creating or updating a reply.
#[derive(Debug, Deserialize)]
pub struct ReplyInput {
    pub content: String,
}

/// Verify that a reply exists, returning the row or a not-found error.
pub async fn ensure_reply_exists(pool: &sqlx::PgPool, reply_id: DbId) -> AppResult<Reply> {
    ReplyRepo::find_by_id(pool, reply_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Reply",
                id: reply_id,
            })
        })
}

/// POST /comments/{id}/replies
pub async fn create_reply(
    auth: AuthMember,
    State(state): State<AppState>,
    Path(comment_id): Path<DbId>,
    Json(input): Json<ReplyInput>,
) -> AppResult<impl IntoResponse> {
    validate_content(&input.content).map_err(AppError::Core)?;
    ensure_comment_exists(&state.pool, comment_id).await?;

    let reply = ReplyRepo::create(&state.pool, comment_id, auth.member_id, &input.content).await?;
    let view = ReplyRepo::find_view(&state.pool, reply.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Created reply vanished".into()))?;

    tracing::info!(
        member_id = auth.member_id,
        comment_id,
        reply_id = reply.id,
        "Reply created"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::new(view))))
}

/// GET /comments/{id}/replies
///
/// List a comment's replies, oldest first. Public.
pub async fn list_replies(
    State(state): State<AppState>,
    Path(comment_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_comment_exists(&state.pool, comment_id).await?;
    let replies = ReplyRepo::list_views_for_comment(&state.pool, comment_id).await?;
    Ok(Json(ApiResponse::new(replies)))
}

/// PUT /replies/{id}
///
/// Replace a reply's content. Author only.
pub async fn update_reply(
    auth: AuthMember,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReplyInput>,
) -> AppResult<impl IntoResponse> {
    validate_content(&input.content).map_err(AppError::Core)?;

    let reply = ensure_reply_exists(&state.pool, id).await?;
    ensure_owner(reply.member_id, auth.member_id).map_err(AppError::Core)?;

    ReplyRepo::update(&state.pool, id, &input.content).await?;
    let view = ReplyRepo::find_view(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::InternalError("Updated reply vanished".into()))?;

    tracing::info!(member_id = auth.member_id, reply_id = id, "Reply updated");

    Ok(Json(ApiResponse::new(view)))
}

/// DELETE /replies/{id}
///
/// Delete a reply and its reactions. Author only.
pub async fn delete_reply(
    auth: AuthMember,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let reply = ensure_reply_exists(&state.pool, id).await?;
    ensure_owner(reply.member_id, auth.member_id).map_err(AppError::Core)?;

    ReplyRepo::delete(&state.pool, id).await?;

    tracing::info!(member_id = auth.member_id, reply_id = id, "Reply deleted");

    Ok(Json(ApiResponse::new("deleted")))
}
