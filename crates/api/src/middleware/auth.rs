//! Authenticated-member extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use agora_core::error::AuthError;
use agora_core::types::DbId;
use agora_db::models::member::Member;
use agora_db::repositories::MemberRepo;

use crate::auth::jwt::validate_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Caller identity extracted from the request headers.
///
/// The per-request contract requires BOTH headers:
///
/// - `Refresh-Token`: checked for presence only. Its value is validated
///   exclusively by the logout and refresh endpoints, so a revoked refresh
///   credential does not invalidate an access token that is still unexpired.
/// - `Authorization: Bearer <access>`: signature and expiry are verified.
///
/// Missing either header is "not logged in" (`MEMBER_NOT_FOUND` on the wire);
/// a failed access-token validation is `INVALID_TOKEN`. Extraction is pure
/// computation -- no database access. Handlers that need the member row call
/// [`resolve_member`].
#[derive(Debug, Clone)]
pub struct AuthMember {
    /// The member's internal database id (from `claims.sub`).
    pub member_id: DbId,
    /// The member's nickname at token issue time.
    pub nickname: String,
}

impl FromRequestParts<AppState> for AuthMember {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if parts.headers.get("refresh-token").is_none() {
            return Err(AuthError::MissingCredential.into());
        }

        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::MissingCredential)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidToken)?;

        let claims = validate_token(token, &state.config.jwt)?;

        Ok(AuthMember {
            member_id: claims.sub,
            nickname: claims.nickname,
        })
    }
}

/// Load the full member row behind an [`AuthMember`].
///
/// A token can outlive its member (account deletion), so absence maps to
/// `MemberNotFound` rather than an internal error.
pub async fn resolve_member(pool: &sqlx::PgPool, auth: &AuthMember) -> AppResult<Member> {
    MemberRepo::find_by_id(pool, auth.member_id)
        .await?
        .ok_or_else(|| AuthError::MemberNotFound.into())
}
