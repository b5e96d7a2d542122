//! Handlers for the `/posts` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use agora_core::error::CoreError;
use agora_core::ownership::ensure_owner;
use agora_core::types::DbId;
use agora_core::validation::{validate_content, validate_title};
use agora_db::models::comment::CommentView;
use agora_db::models::post::{CreatePost, Post, PostView, UpdatePost};
use agora_db::repositories::{CommentRepo, PostRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthMember;
use crate::response::ApiResponse;
use crate::state::AppState;

/// A post with its comment thread, as returned by `GET /posts/{id}`.
#[derive(Debug, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: PostView,
    pub comments: Vec<CommentView>,
}

/// Verify that a post exists, returning the row or a not-found error.
pub async fn ensure_post_exists(pool: &sqlx::PgPool, post_id: DbId) -> AppResult<Post> {
    PostRepo::find_by_id(pool, post_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Post",
                id: post_id,
            })
        })
}

/// POST /posts
///
/// Create a post. Image files live in external object storage; only the URL
/// is carried here.
pub async fn create_post(
    auth: AuthMember,
    State(state): State<AppState>,
    Json(input): Json<CreatePost>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(AppError::Core)?;
    validate_content(&input.content).map_err(AppError::Core)?;

    let post = PostRepo::create(&state.pool, auth.member_id, &input).await?;
    let view = PostRepo::find_view(&state.pool, post.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Created post vanished".into()))?;

    tracing::info!(member_id = auth.member_id, post_id = post.id, "Post created");

    Ok((StatusCode::CREATED, Json(ApiResponse::new(view))))
}

/// GET /posts
///
/// List all posts, most recently modified first. Public.
pub async fn list_posts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let posts = PostRepo::list_views(&state.pool).await?;
    Ok(Json(ApiResponse::new(posts)))
}

/// GET /posts/{id}
///
/// A single post with its comments. Public.
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = PostRepo::find_view(&state.pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Post",
            id,
        })
    })?;

    let comments = CommentRepo::list_views_for_post(&state.pool, id).await?;

    Ok(Json(ApiResponse::new(PostDetail { post, comments })))
}

/// PUT /posts/{id}
///
/// Replace a post's title, content, and image URL. Author only.
pub async fn update_post(
    auth: AuthMember,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePost>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(AppError::Core)?;
    validate_content(&input.content).map_err(AppError::Core)?;

    let post = ensure_post_exists(&state.pool, id).await?;
    ensure_owner(post.member_id, auth.member_id).map_err(AppError::Core)?;

    PostRepo::update(&state.pool, id, &input).await?;
    let view = PostRepo::find_view(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::InternalError("Updated post vanished".into()))?;

    tracing::info!(member_id = auth.member_id, post_id = id, "Post updated");

    Ok(Json(ApiResponse::new(view)))
}

/// DELETE /posts/{id}
///
/// Delete a post and, by cascade, its comments, replies, and reactions.
/// Author only.
pub async fn delete_post(
    auth: AuthMember,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = ensure_post_exists(&state.pool, id).await?;
    ensure_owner(post.member_id, auth.member_id).map_err(AppError::Core)?;

    PostRepo::delete(&state.pool, id).await?;

    tracing::info!(member_id = auth.member_id, post_id = id, "Post deleted");

    Ok(Json(ApiResponse::new("deleted")))
}
