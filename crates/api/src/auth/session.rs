//! Session lifecycle: token issuance, access reissue, and logout.
//!
//! The refresh credential store is a single slot per member -- logging in
//! again overwrites the previous credential, logging out deletes it. This
//! module is the only writer of that store.

use agora_core::error::AuthError;
use chrono::Utc;
use sqlx::PgPool;

use agora_db::models::member::Member;
use agora_db::repositories::{MemberRepo, RefreshTokenRepo};

use crate::auth::jwt::{
    generate_access_token, generate_refresh_token, hash_refresh_token, JwtConfig,
};
use crate::error::{AppError, AppResult};

/// Credentials handed to a client on login or refresh.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Access-token expiry as epoch milliseconds, for the
    /// `Access-Token-Expire-Time` response header.
    pub access_expires_at: i64,
}

/// Issue a fresh access + refresh pair for a member.
///
/// Persists the refresh credential (hashed) in the member's slot, replacing
/// any prior one: a second login invalidates the first session's refresh
/// token.
pub async fn issue_tokens(
    pool: &PgPool,
    config: &JwtConfig,
    member: &Member,
) -> AppResult<TokenPair> {
    let issued = generate_access_token(member.id, &member.nickname, config)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();
    let refresh_expires_at = Utc::now() + chrono::Duration::days(config.refresh_token_expiry_days);

    RefreshTokenRepo::upsert(pool, member.id, &refresh_hash, refresh_expires_at).await?;

    tracing::info!(member_id = member.id, "Issued token pair");

    Ok(TokenPair {
        access_token: issued.token,
        refresh_token: refresh_plaintext,
        access_expires_at: issued.expires_at.timestamp_millis(),
    })
}

/// Delete the refresh credential identified by the presented token.
///
/// The token is matched by digest regardless of expiry -- logging out of an
/// expired session is still a logout. An unknown token means there is no
/// member to log out.
pub async fn logout(pool: &PgPool, refresh_token: &str) -> AppResult<()> {
    let token_hash = hash_refresh_token(refresh_token);

    let stored = RefreshTokenRepo::find_by_hash(pool, &token_hash)
        .await?
        .ok_or(AuthError::MemberNotFound)?;

    RefreshTokenRepo::delete_for_member(pool, stored.member_id).await?;

    tracing::info!(member_id = stored.member_id, "Logged out");
    Ok(())
}

/// Reissue an access token against a live refresh credential.
///
/// Does not require the old access token, and does not rotate the refresh
/// credential: the stored slot stays valid until logout or expiry. Returns
/// the member alongside the pair so callers can build a profile response.
pub async fn refresh_access_token(
    pool: &PgPool,
    config: &JwtConfig,
    refresh_token: &str,
) -> AppResult<(Member, TokenPair)> {
    let token_hash = hash_refresh_token(refresh_token);

    let stored = RefreshTokenRepo::find_live_by_hash(pool, &token_hash)
        .await?
        .ok_or(AuthError::InvalidToken)?;

    let member = MemberRepo::find_by_id(pool, stored.member_id)
        .await?
        .ok_or(AuthError::MemberNotFound)?;

    let issued = generate_access_token(member.id, &member.nickname, config)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(member_id = member.id, "Reissued access token");

    let pair = TokenPair {
        access_token: issued.token,
        refresh_token: refresh_token.to_string(),
        access_expires_at: issued.expires_at.timestamp_millis(),
    };
    Ok((member, pair))
}
