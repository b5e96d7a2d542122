//! Comment model and DTOs.

use agora_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A comment row from the `comments` table.
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub post_id: DbId,
    pub member_id: DbId,
    pub content: String,
    pub likes_num: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A comment joined with its author's nickname, as served to clients.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommentView {
    pub id: DbId,
    pub post_id: DbId,
    pub content: String,
    pub likes_num: i32,
    pub author: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
