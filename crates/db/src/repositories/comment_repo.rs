//! Repository for the `comments` table.

use agora_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CommentView};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, post_id, member_id, content, likes_num, created_at, updated_at";

/// Joined column list for author-facing views.
const VIEW_COLUMNS: &str = "c.id, c.post_id, c.content, c.likes_num, \
    m.nickname AS author, c.created_at, c.updated_at";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment under a post, returning the created row.
    pub async fn create(
        pool: &PgPool,
        post_id: DbId,
        member_id: DbId,
        content: &str,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (post_id, member_id, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(post_id)
            .bind(member_id)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a comment by id, joined with its author's nickname.
    pub async fn find_view(pool: &PgPool, id: DbId) -> Result<Option<CommentView>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS} FROM comments c
             JOIN members m ON m.id = c.member_id
             WHERE c.id = $1"
        );
        sqlx::query_as::<_, CommentView>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a post's comments, oldest first.
    pub async fn list_views_for_post(
        pool: &PgPool,
        post_id: DbId,
    ) -> Result<Vec<CommentView>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS} FROM comments c
             JOIN members m ON m.id = c.member_id
             WHERE c.post_id = $1
             ORDER BY c.created_at ASC"
        );
        sqlx::query_as::<_, CommentView>(&query)
            .bind(post_id)
            .fetch_all(pool)
            .await
    }

    /// List the comments a member wrote, most recent first.
    pub async fn list_views_by_member(
        pool: &PgPool,
        member_id: DbId,
    ) -> Result<Vec<CommentView>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS} FROM comments c
             JOIN members m ON m.id = c.member_id
             WHERE c.member_id = $1
             ORDER BY c.created_at DESC"
        );
        sqlx::query_as::<_, CommentView>(&query)
            .bind(member_id)
            .fetch_all(pool)
            .await
    }

    /// List the comments a member has liked, most recently liked first.
    pub async fn list_views_liked_by(
        pool: &PgPool,
        member_id: DbId,
    ) -> Result<Vec<CommentView>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS} FROM comments c
             JOIN members m ON m.id = c.member_id
             JOIN comment_likes l ON l.comment_id = c.id
             WHERE l.member_id = $1
             ORDER BY l.created_at DESC"
        );
        sqlx::query_as::<_, CommentView>(&query)
            .bind(member_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a comment's content.
    pub async fn update(pool: &PgPool, id: DbId, content: &str) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET content = $1, updated_at = NOW()
             WHERE id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(content)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete a comment. Replies and reactions cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
