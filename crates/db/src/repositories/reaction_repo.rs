//! The like/unlike toggle engine.
//!
//! One implementation serves all three likeable kinds (post, comment, reply);
//! [`TargetKind`] resolves the table and column names. The reaction row and
//! the target's denormalized `likes_num` are only ever written here, together,
//! inside one transaction.

use agora_core::types::DbId;
use sqlx::PgPool;

/// The kind of entity a reaction targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Post,
    Comment,
    Reply,
}

impl TargetKind {
    /// Entity name used in not-found errors.
    pub fn entity_name(self) -> &'static str {
        match self {
            TargetKind::Post => "Post",
            TargetKind::Comment => "Comment",
            TargetKind::Reply => "Reply",
        }
    }

    /// Table holding the target entity.
    fn target_table(self) -> &'static str {
        match self {
            TargetKind::Post => "posts",
            TargetKind::Comment => "comments",
            TargetKind::Reply => "replies",
        }
    }

    /// Table holding the reaction rows for this kind.
    fn reaction_table(self) -> &'static str {
        match self {
            TargetKind::Post => "post_likes",
            TargetKind::Comment => "comment_likes",
            TargetKind::Reply => "reply_likes",
        }
    }

    /// Foreign-key column in the reaction table pointing at the target.
    fn target_column(self) -> &'static str {
        match self {
            TargetKind::Post => "post_id",
            TargetKind::Comment => "comment_id",
            TargetKind::Reply => "reply_id",
        }
    }
}

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// A reaction row was created.
    Liked,
    /// The existing reaction row was removed.
    Unliked,
}

/// Result of a successful toggle, with the counter as committed.
#[derive(Debug, Clone, Copy)]
pub struct ToggleResult {
    pub outcome: ToggleOutcome,
    pub likes_num: i32,
}

/// Toggle engine over the three reaction tables.
pub struct ReactionRepo;

impl ReactionRepo {
    /// Toggle the caller's reaction on a target.
    ///
    /// Returns `Ok(None)` when the target does not exist (nothing is written
    /// in that case). Otherwise creates or removes the reaction row and
    /// adjusts `likes_num` in the same transaction, so the counter always
    /// equals the live row count.
    ///
    /// Two concurrent first-time toggles on the same (member, target) pair
    /// race on the unique constraint; the loser's insert fails with 23505 and
    /// is retried once, at which point it observes the winner's row and
    /// removes it. Toggles on distinct pairs do not contend on reaction rows.
    ///
    /// A target deleted between the existence check and the insert surfaces
    /// as a foreign-key violation on the reaction row; that is target-gone,
    /// reported as `Ok(None)` like any other missing target.
    pub async fn toggle(
        pool: &PgPool,
        kind: TargetKind,
        member_id: DbId,
        target_id: DbId,
    ) -> Result<Option<ToggleResult>, sqlx::Error> {
        let result = match Self::toggle_once(pool, kind, member_id, target_id).await {
            Err(e) if is_unique_violation(&e) => {
                tracing::debug!(
                    member_id,
                    target_id,
                    kind = kind.entity_name(),
                    "Concurrent toggle collision, retrying once"
                );
                Self::toggle_once(pool, kind, member_id, target_id).await
            }
            other => other,
        };

        match result {
            Err(e) if is_foreign_key_violation(&e) => {
                tracing::debug!(
                    member_id,
                    target_id,
                    kind = kind.entity_name(),
                    "Target deleted mid-toggle"
                );
                Ok(None)
            }
            other => other,
        }
    }

    /// One toggle attempt: existence check, then delete-or-insert plus the
    /// counter update, all in a single transaction.
    async fn toggle_once(
        pool: &PgPool,
        kind: TargetKind,
        member_id: DbId,
        target_id: DbId,
    ) -> Result<Option<ToggleResult>, sqlx::Error> {
        let target_table = kind.target_table();
        let reaction_table = kind.reaction_table();
        let target_column = kind.target_column();

        let mut tx = pool.begin().await?;

        let exists_query = format!("SELECT 1 FROM {target_table} WHERE id = $1");
        let target = sqlx::query(&exists_query)
            .bind(target_id)
            .fetch_optional(&mut *tx)
            .await?;
        if target.is_none() {
            // Target absent: nothing touches the reaction table.
            return Ok(None);
        }

        let delete_query = format!(
            "DELETE FROM {reaction_table}
             WHERE member_id = $1 AND {target_column} = $2"
        );
        let deleted = sqlx::query(&delete_query)
            .bind(member_id)
            .bind(target_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let result = if deleted > 0 {
            let likes_num = Self::adjust_counter(&mut tx, target_table, target_id, -1).await?;
            ToggleResult {
                outcome: ToggleOutcome::Unliked,
                likes_num,
            }
        } else {
            let insert_query = format!(
                "INSERT INTO {reaction_table} (member_id, {target_column})
                 VALUES ($1, $2)"
            );
            sqlx::query(&insert_query)
                .bind(member_id)
                .bind(target_id)
                .execute(&mut *tx)
                .await?;
            let likes_num = Self::adjust_counter(&mut tx, target_table, target_id, 1).await?;
            ToggleResult {
                outcome: ToggleOutcome::Liked,
                likes_num,
            }
        };

        tx.commit().await?;
        Ok(Some(result))
    }

    /// Adjust the denormalized counter and return its committed value.
    async fn adjust_counter(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        target_table: &str,
        target_id: DbId,
        delta: i32,
    ) -> Result<i32, sqlx::Error> {
        let query = format!(
            "UPDATE {target_table} SET likes_num = likes_num + $1
             WHERE id = $2
             RETURNING likes_num"
        );
        let (likes_num,): (i32,) = sqlx::query_as(&query)
            .bind(delta)
            .bind(target_id)
            .fetch_one(&mut **tx)
            .await?;
        Ok(likes_num)
    }

    /// Whether a member currently has a reaction on the target.
    pub async fn is_liked(
        pool: &PgPool,
        kind: TargetKind,
        member_id: DbId,
        target_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "SELECT 1 FROM {} WHERE member_id = $1 AND {} = $2",
            kind.reaction_table(),
            kind.target_column()
        );
        let row = sqlx::query(&query)
            .bind(member_id)
            .bind(target_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    /// Count live reaction rows for a target.
    pub async fn count_for_target(
        pool: &PgPool,
        kind: TargetKind,
        target_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) FROM {} WHERE {} = $1",
            kind.reaction_table(),
            kind.target_column()
        );
        let (count,): (i64,) = sqlx::query_as(&query)
            .bind(target_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}

/// PostgreSQL unique constraint violation (error code 23505).
fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505")
    )
}

/// PostgreSQL foreign-key violation (error code 23503).
fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503")
    )
}
