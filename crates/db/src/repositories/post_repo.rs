//! Repository for the `posts` table.

use agora_core::types::DbId;
use sqlx::PgPool;

use crate::models::post::{CreatePost, Post, PostView, UpdatePost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, member_id, title, content, image_url, likes_num, created_at, updated_at";

/// Joined column list for author-facing views.
const VIEW_COLUMNS: &str = "p.id, p.title, p.content, p.image_url, p.likes_num, \
    m.nickname AS author, p.created_at, p.updated_at";

/// Provides CRUD operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the created row.
    pub async fn create(
        pool: &PgPool,
        member_id: DbId,
        input: &CreatePost,
    ) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (member_id, title, content, image_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(member_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a post by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a post by id, joined with its author's nickname.
    pub async fn find_view(pool: &PgPool, id: DbId) -> Result<Option<PostView>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS} FROM posts p
             JOIN members m ON m.id = p.member_id
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, PostView>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all posts, most recently modified first.
    pub async fn list_views(pool: &PgPool) -> Result<Vec<PostView>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS} FROM posts p
             JOIN members m ON m.id = p.member_id
             ORDER BY p.updated_at DESC"
        );
        sqlx::query_as::<_, PostView>(&query).fetch_all(pool).await
    }

    /// List the posts a member wrote, most recent first.
    pub async fn list_views_by_member(
        pool: &PgPool,
        member_id: DbId,
    ) -> Result<Vec<PostView>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS} FROM posts p
             JOIN members m ON m.id = p.member_id
             WHERE p.member_id = $1
             ORDER BY p.updated_at DESC"
        );
        sqlx::query_as::<_, PostView>(&query)
            .bind(member_id)
            .fetch_all(pool)
            .await
    }

    /// List the posts a member has liked, most recently liked first.
    pub async fn list_views_liked_by(
        pool: &PgPool,
        member_id: DbId,
    ) -> Result<Vec<PostView>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS} FROM posts p
             JOIN members m ON m.id = p.member_id
             JOIN post_likes l ON l.post_id = p.id
             WHERE l.member_id = $1
             ORDER BY l.created_at DESC"
        );
        sqlx::query_as::<_, PostView>(&query)
            .bind(member_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a post's title, content, and image URL.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePost,
    ) -> Result<Post, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET
                title = $1,
                content = $2,
                image_url = $3,
                updated_at = NOW()
             WHERE id = $4
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.image_url)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete a post. Comments, replies, and reactions cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
