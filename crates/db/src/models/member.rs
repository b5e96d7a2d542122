//! Member model and DTOs.

use agora_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A member row from the `members` table.
///
/// Deliberately not `Serialize`: the password hash must never reach the wire.
/// Handlers build their own response DTOs from this.
#[derive(Debug, Clone, FromRow)]
pub struct Member {
    pub id: DbId,
    pub nickname: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new member.
pub struct CreateMember {
    pub nickname: String,
    pub password_hash: String,
}
