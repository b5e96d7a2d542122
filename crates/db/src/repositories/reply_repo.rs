//! Repository for the `replies` table.

use agora_core::types::DbId;
use sqlx::PgPool;

use crate::models::reply::{Reply, ReplyView};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, comment_id, member_id, content, likes_num, created_at, updated_at";

/// Joined column list for author-facing views.
const VIEW_COLUMNS: &str = "r.id, r.comment_id, r.content, r.likes_num, \
    m.nickname AS author, r.created_at, r.updated_at";

/// Provides CRUD operations for replies.
pub struct ReplyRepo;

impl ReplyRepo {
    /// Insert a new reply under a comment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        comment_id: DbId,
        member_id: DbId,
        content: &str,
    ) -> Result<Reply, sqlx::Error> {
        let query = format!(
            "INSERT INTO replies (comment_id, member_id, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reply>(&query)
            .bind(comment_id)
            .bind(member_id)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// Find a reply by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reply>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM replies WHERE id = $1");
        sqlx::query_as::<_, Reply>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a reply by id, joined with its author's nickname.
    pub async fn find_view(pool: &PgPool, id: DbId) -> Result<Option<ReplyView>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS} FROM replies r
             JOIN members m ON m.id = r.member_id
             WHERE r.id = $1"
        );
        sqlx::query_as::<_, ReplyView>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a comment's replies, oldest first.
    pub async fn list_views_for_comment(
        pool: &PgPool,
        comment_id: DbId,
    ) -> Result<Vec<ReplyView>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS} FROM replies r
             JOIN members m ON m.id = r.member_id
             WHERE r.comment_id = $1
             ORDER BY r.created_at ASC"
        );
        sqlx::query_as::<_, ReplyView>(&query)
            .bind(comment_id)
            .fetch_all(pool)
            .await
    }

    /// List the replies a member wrote, most recent first.
    pub async fn list_views_by_member(
        pool: &PgPool,
        member_id: DbId,
    ) -> Result<Vec<ReplyView>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS} FROM replies r
             JOIN members m ON m.id = r.member_id
             WHERE r.member_id = $1
             ORDER BY r.created_at DESC"
        );
        sqlx::query_as::<_, ReplyView>(&query)
            .bind(member_id)
            .fetch_all(pool)
            .await
    }

    /// List the replies a member has liked, most recently liked first.
    pub async fn list_views_liked_by(
        pool: &PgPool,
        member_id: DbId,
    ) -> Result<Vec<ReplyView>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS} FROM replies r
             JOIN members m ON m.id = r.member_id
             JOIN reply_likes l ON l.reply_id = r.id
             WHERE l.member_id = $1
             ORDER BY l.created_at DESC"
        );
        sqlx::query_as::<_, ReplyView>(&query)
            .bind(member_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a reply's content.
    pub async fn update(pool: &PgPool, id: DbId, content: &str) -> Result<Reply, sqlx::Error> {
        let query = format!(
            "UPDATE replies SET content = $1, updated_at = NOW()
             WHERE id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reply>(&query)
            .bind(content)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete a reply. Its reactions cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM replies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
