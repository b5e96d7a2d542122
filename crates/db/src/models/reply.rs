//! Reply (nested comment) model and DTOs.

use agora_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A reply row from the `replies` table.
#[derive(Debug, Clone, FromRow)]
pub struct Reply {
    pub id: DbId,
    pub comment_id: DbId,
    pub member_id: DbId,
    pub content: String,
    pub likes_num: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A reply joined with its author's nickname, as served to clients.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReplyView {
    pub id: DbId,
    pub comment_id: DbId,
    pub content: String,
    pub likes_num: i32,
    pub author: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
