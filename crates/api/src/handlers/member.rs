//! Handlers for the `/members` resource: signup, login, logout, access
//! reissue, and the mypage aggregations.

use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use agora_core::error::{AuthError, CoreError};
use agora_core::types::{DbId, Timestamp};
use agora_core::validation::{validate_nickname, validate_password};
use agora_db::models::comment::CommentView;
use agora_db::models::member::{CreateMember, Member};
use agora_db::models::post::PostView;
use agora_db::models::reply::ReplyView;
use agora_db::repositories::{CommentRepo, MemberRepo, PostRepo, ReplyRepo};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::{self, TokenPair};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{resolve_member, AuthMember};
use crate::response::ApiResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Request / response types
-------------------------------------------------------------------------- */

/// Request body for `POST /members/signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub nickname: String,
    pub password: String,
    pub password_confirm: String,
}

/// Request body for `POST /members/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub nickname: String,
    pub password: String,
}

/// Public member info returned by signup, login, and refresh.
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: DbId,
    pub nickname: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            nickname: member.nickname.clone(),
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}

/// Everything a member wrote, or everything they liked.
#[derive(Debug, Serialize)]
pub struct MypageResponse {
    pub posts: Vec<PostView>,
    pub comments: Vec<CommentView>,
    pub replies: Vec<ReplyView>,
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Read the raw `Refresh-Token` header, rejecting requests without one.
fn refresh_header(headers: &HeaderMap) -> AppResult<&str> {
    headers
        .get("refresh-token")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AuthError::MissingCredential.into())
}

/// Build the three credential response headers set on login and refresh.
fn token_headers(pair: &TokenPair) -> AppResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        "authorization",
        HeaderValue::from_str(&format!("Bearer {}", pair.access_token))
            .map_err(|e| AppError::InternalError(format!("Invalid header value: {e}")))?,
    );
    headers.insert(
        "refresh-token",
        HeaderValue::from_str(&pair.refresh_token)
            .map_err(|e| AppError::InternalError(format!("Invalid header value: {e}")))?,
    );
    headers.insert(
        "access-token-expire-time",
        HeaderValue::from_str(&pair.access_expires_at.to_string())
            .map_err(|e| AppError::InternalError(format!("Invalid header value: {e}")))?,
    );
    Ok(headers)
}

/* --------------------------------------------------------------------------
Handlers
-------------------------------------------------------------------------- */

/// POST /members/signup
///
/// Create a member account. Nickname must be unique; password and its
/// confirmation must match.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<impl IntoResponse> {
    validate_nickname(&input.nickname).map_err(AppError::Core)?;
    validate_password(&input.password).map_err(AppError::Core)?;

    if input.password != input.password_confirm {
        return Err(AppError::Core(CoreError::Conflict(
            "Password and confirmation do not match".into(),
        )));
    }

    if MemberRepo::find_by_nickname(&state.pool, &input.nickname)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Nickname is already taken".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // The uq_members_nickname constraint still backstops a racing signup.
    let member = MemberRepo::create(
        &state.pool,
        &CreateMember {
            nickname: input.nickname,
            password_hash,
        },
    )
    .await?;

    tracing::info!(member_id = member.id, nickname = %member.nickname, "Member created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(MemberResponse::from(&member))),
    ))
}

/// POST /members/login
///
/// Authenticate with nickname + password. On success the three credential
/// headers (`Authorization`, `Refresh-Token`, `Access-Token-Expire-Time`) are
/// set and the member profile is returned.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let member = MemberRepo::find_by_nickname(&state.pool, &input.nickname)
        .await?
        .ok_or(AuthError::MemberNotFound)?;

    let password_valid = verify_password(&input.password, &member.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AuthError::MemberNotFound.into());
    }

    let pair = session::issue_tokens(&state.pool, &state.config.jwt, &member).await?;
    let headers = token_headers(&pair)?;

    Ok((
        headers,
        Json(ApiResponse::new(MemberResponse::from(&member))),
    ))
}

/// POST /members/logout
///
/// Delete the refresh credential identified by the `Refresh-Token` header.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    let refresh_token = refresh_header(&headers)?;
    session::logout(&state.pool, refresh_token).await?;
    Ok(Json(ApiResponse::new("logged out")))
}

/// POST /members/refresh
///
/// Reissue an access token against a live refresh credential. The old access
/// token is not required; the refresh credential is not rotated.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    let refresh_token = refresh_header(&headers)?;
    let (member, pair) =
        session::refresh_access_token(&state.pool, &state.config.jwt, refresh_token).await?;
    let headers = token_headers(&pair)?;

    Ok((
        headers,
        Json(ApiResponse::new(MemberResponse::from(&member))),
    ))
}

/// GET /members/mypage/written
///
/// Everything the caller has written: posts, comments, and replies.
pub async fn mypage_written(
    auth: AuthMember,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let member = resolve_member(&state.pool, &auth).await?;

    let posts = PostRepo::list_views_by_member(&state.pool, member.id).await?;
    let comments = CommentRepo::list_views_by_member(&state.pool, member.id).await?;
    let replies = ReplyRepo::list_views_by_member(&state.pool, member.id).await?;

    Ok(Json(ApiResponse::new(MypageResponse {
        posts,
        comments,
        replies,
    })))
}

/// GET /members/mypage/liked
///
/// Everything the caller has liked, resolved through the reaction tables.
pub async fn mypage_liked(
    auth: AuthMember,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let member = resolve_member(&state.pool, &auth).await?;

    let posts = PostRepo::list_views_liked_by(&state.pool, member.id).await?;
    let comments = CommentRepo::list_views_liked_by(&state.pool, member.id).await?;
    let replies = ReplyRepo::list_views_liked_by(&state.pool, member.id).await?;

    Ok(Json(ApiResponse::new(MypageResponse {
        posts,
        comments,
        replies,
    })))
}
