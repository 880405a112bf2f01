//! Repository for the `copy_logs` table.
//!
//! Append-only: the application inserts and aggregates, never updates or
//! deletes. Failure handling is the caller's concern; the copy handler
//! deliberately swallows a failed write because the clipboard copy it
//! records already succeeded.

use sqlx::PgPool;

use radd_core::types::DbId;

/// Provides the append-only copy log.
pub struct CopyLogRepo;

impl CopyLogRepo {
    /// Append one copy event for (user, reply).
    pub async fn record(pool: &PgPool, user_id: DbId, reply_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO copy_logs (user_id, reply_id) VALUES ($1, $2)")
            .bind(user_id)
            .bind(reply_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Total number of recorded copies for a reply.
    pub async fn count_for_reply(pool: &PgPool, reply_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM copy_logs WHERE reply_id = $1")
                .bind(reply_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
