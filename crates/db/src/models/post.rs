//! Post model and DTOs.

use agora_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A post row from the `posts` table.
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: DbId,
    pub member_id: DbId,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub likes_num: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A post joined with its author's nickname, as served to clients.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PostView {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub likes_num: i32,
    pub author: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new post.
#[derive(Debug, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

/// DTO for updating a post. All fields are replaced.
#[derive(Debug, Deserialize)]
pub struct UpdatePost {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}
