//! Like/unlike toggle endpoints for posts, comments, and replies.
//!
//! All three routes funnel into one function over [`TargetKind`]; the
//! transactional work lives in `agora_db::repositories::ReactionRepo`.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use agora_core::error::CoreError;
use agora_core::types::DbId;
use agora_db::repositories::{ReactionRepo, TargetKind, ToggleOutcome};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{resolve_member, AuthMember};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Result of a toggle as serialized to clients.
#[derive(Debug, Serialize)]
pub struct LikeResponse {
    /// `true` when the toggle created a reaction, `false` when it removed one.
    pub liked: bool,
    /// The target's counter as committed by this toggle.
    pub likes_num: i32,
}

/// POST /posts/{id}/like
pub async fn toggle_post_like(
    auth: AuthMember,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    toggle(auth, state, TargetKind::Post, id).await
}

/// POST /comments/{id}/like
pub async fn toggle_comment_like(
    auth: AuthMember,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    toggle(auth, state, TargetKind::Comment, id).await
}

/// POST /replies/{id}/like
pub async fn toggle_reply_like(
    auth: AuthMember,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    toggle(auth, state, TargetKind::Reply, id).await
}

/// Shared toggle flow: resolve the member, then create or remove the
/// reaction atomically.
async fn toggle(
    auth: AuthMember,
    state: AppState,
    kind: TargetKind,
    target_id: DbId,
) -> AppResult<Json<ApiResponse<LikeResponse>>> {
    let member = resolve_member(&state.pool, &auth).await?;

    let result = ReactionRepo::toggle(&state.pool, kind, member.id, target_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: kind.entity_name(),
                id: target_id,
            })
        })?;

    let liked = result.outcome == ToggleOutcome::Liked;

    tracing::info!(
        member_id = member.id,
        target_id,
        kind = kind.entity_name(),
        liked,
        likes_num = result.likes_num,
        "Reaction toggled"
    );

    Ok(Json(ApiResponse::new(LikeResponse {
        liked,
        likes_num: result.likes_num,
    })))
}
