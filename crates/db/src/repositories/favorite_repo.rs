//! Repository for the `favorites` table.
//!
//! A favorite is a single-row relation per (user, reply). The only
//! mutation is `toggle`; double-toggling returns the pair to its original
//! membership state. Concurrent toggles resolve last-writer-wins at the
//! store via the unique constraint; no locking here.

use sqlx::PgPool;

use radd_core::types::DbId;

use crate::models::reply::Reply;

/// Column list for joined reply rows, disambiguated for the favorites join.
const REPLY_COLUMNS: &str = "r.id, r.title_en, r.title_ar, r.content_en, r.content_ar, \
                              r.category_id, r.created_by, r.is_active, r.created_at, r.updated_at";

/// Provides the favorite toggle and favorite-scoped queries.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Toggle the favorite state for (user, reply).
    ///
    /// Returns the new membership state: `true` when the reply is now
    /// favorited. The insert uses `ON CONFLICT DO NOTHING` so a racing
    /// duplicate insert is harmless.
    pub async fn toggle(pool: &PgPool, user_id: DbId, reply_id: DbId) -> Result<bool, sqlx::Error> {
        let removed = sqlx::query(
            "DELETE FROM favorites WHERE user_id = $1 AND reply_id = $2",
        )
        .bind(user_id)
        .bind(reply_id)
        .execute(pool)
        .await?;

        if removed.rows_affected() > 0 {
            return Ok(false);
        }

        sqlx::query(
            "INSERT INTO favorites (user_id, reply_id) VALUES ($1, $2)
             ON CONFLICT (user_id, reply_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(reply_id)
        .execute(pool)
        .await?;
        Ok(true)
    }

    /// True when the user has favorited the reply.
    pub async fn is_favorite(
        pool: &PgPool,
        user_id: DbId,
        reply_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM favorites WHERE user_id = $1 AND reply_id = $2",
        )
        .bind(user_id)
        .bind(reply_id)
        .fetch_optional(pool)
        .await?;
        Ok(row.is_some())
    }

    /// IDs of every reply the user has favorited.
    pub async fn reply_ids_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> =
            sqlx::query_as("SELECT reply_id FROM favorites WHERE user_id = $1 ORDER BY created_at DESC")
                .bind(user_id)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// The user's favorited replies, most recently favorited first.
    pub async fn list_replies(pool: &PgPool, user_id: DbId) -> Result<Vec<Reply>, sqlx::Error> {
        let query = format!(
            "SELECT {REPLY_COLUMNS} FROM favorites f
             JOIN replies r ON r.id = f.reply_id
             WHERE f.user_id = $1
             ORDER BY f.created_at DESC"
        );
        sqlx::query_as::<_, Reply>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
