//! Repository for the `refresh_tokens` table.
//!
//! A single-slot keyed store: one row per member, keyed by `member_id`.
//! Issuing tokens overwrites the slot, logout deletes it. This table is
//! mutated only through this repository.

use agora_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::refresh_token::RefreshToken;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "member_id, token_hash, expires_at, created_at, updated_at";

/// Provides operations on the per-member refresh credential slot.
pub struct RefreshTokenRepo;

impl RefreshTokenRepo {
    /// Store a refresh credential for a member, replacing any prior one.
    ///
    /// The previous credential (if any) becomes invalid immediately: there is
    /// at most one live refresh token per member.
    pub async fn upsert(
        pool: &PgPool,
        member_id: DbId,
        token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<RefreshToken, sqlx::Error> {
        let query = format!(
            "INSERT INTO refresh_tokens (member_id, token_hash, expires_at)
             VALUES ($1, $2, $3)
             ON CONFLICT (member_id) DO UPDATE
                SET token_hash = EXCLUDED.token_hash,
                    expires_at = EXCLUDED.expires_at,
                    updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RefreshToken>(&query)
            .bind(member_id)
            .bind(token_hash)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a stored credential by its token digest, regardless of expiry.
    ///
    /// Logout accepts an expired credential (the slot still identifies the
    /// member); callers that need liveness use [`Self::find_live_by_hash`].
    pub async fn find_by_hash(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM refresh_tokens WHERE token_hash = $1");
        sqlx::query_as::<_, RefreshToken>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Find a stored credential by digest, only if it has not expired.
    pub async fn find_live_by_hash(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM refresh_tokens
             WHERE token_hash = $1 AND expires_at > NOW()"
        );
        sqlx::query_as::<_, RefreshToken>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Delete a member's credential slot. Returns `true` if a row was removed.
    pub async fn delete_for_member(pool: &PgPool, member_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE member_id = $1")
            .bind(member_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
