//! Refresh credential model.

use agora_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A refresh credential row from the `refresh_tokens` table.
///
/// Keyed by `member_id` (single slot per member). Only the SHA-256 digest of
/// the token is stored.
#[derive(Debug, Clone, FromRow)]
pub struct RefreshToken {
    pub member_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
