//! Handlers for comments (created under a post, mutated by id).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use agora_core::error::CoreError;
use agora_core::ownership::ensure_owner;
use agora_core::types::DbId;
use agora_core::validation::validate_content;
use agora_db::models::comment::Comment;
use agora_db::repositories::CommentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::post::ensure_post_exists;
use crate::middleware::auth::AuthMember;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for creating or updating a comment.
#[derive(Debug, Deserialize)]
pub struct CommentInput {
    pub content: String,
}

/// Verify that a comment exists, returning the row or a not-found error.
pub async fn ensure_comment_exists(pool: &sqlx::PgPool, comment_id: DbId) -> AppResult<Comment> {
    CommentRepo::find_by_id(pool, comment_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Comment",
                id: comment_id,
            })
        })
}

/// POST /posts/{id}/comments
pub async fn create_comment(
    auth: AuthMember,
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
    Json(input): Json<CommentInput>,
) -> AppResult<impl IntoResponse> {
    validate_content(&input.content).map_err(AppError::Core)?;
    ensure_post_exists(&state.pool, post_id).await?;

    let comment =
        CommentRepo::create(&state.pool, post_id, auth.member_id, &input.content).await?;
    let view = CommentRepo::find_view(&state.pool, comment.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Created comment vanished".into()))?;

    tracing::info!(
        member_id = auth.member_id,
        post_id,
        comment_id = comment.id,
        "Comment created"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::new(view))))
}

/// GET /posts/{id}/comments
///
/// List a post's comments, oldest first. Public.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_post_exists(&state.pool, post_id).await?;
    let comments = CommentRepo::list_views_for_post(&state.pool, post_id).await?;
    Ok(Json(ApiResponse::new(comments)))
}

/// PUT /comments/{id}
///
/// Replace a comment's content. Author only.
pub async fn update_comment(
    auth: AuthMember,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CommentInput>,
) -> AppResult<impl IntoResponse> {
    validate_content(&input.content).map_err(AppError::Core)?;

    let comment = ensure_comment_exists(&state.pool, id).await?;
    ensure_owner(comment.member_id, auth.member_id).map_err(AppError::Core)?;

    CommentRepo::update(&state.pool, id, &input.content).await?;
    let view = CommentRepo::find_view(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::InternalError("Updated comment vanished".into()))?;

    tracing::info!(member_id = auth.member_id, comment_id = id, "Comment updated");

    Ok(Json(ApiResponse::new(view)))
}

/// DELETE /comments/{id}
///
/// Delete a comment and, by cascade, its replies and reactions. Author only.
pub async fn delete_comment(
    auth: AuthMember,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let comment = ensure_comment_exists(&state.pool, id).await?;
    ensure_owner(comment.member_id, auth.member_id).map_err(AppError::Core)?;

    CommentRepo::delete(&state.pool, id).await?;

    tracing::info!(member_id = auth.member_id, comment_id = id, "Comment deleted");

    Ok(Json(ApiResponse::new("deleted")))
}
