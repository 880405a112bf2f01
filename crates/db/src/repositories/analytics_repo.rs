//! Aggregate queries behind the admin analytics dashboard.

use sqlx::PgPool;

use crate::models::analytics::{AnalyticsSummary, DailyCopyCount, TopReply};

/// Default number of days in the copies-per-day series.
const DEFAULT_DAYS: i64 = 30;

/// Maximum number of days in the copies-per-day series.
const MAX_DAYS: i64 = 365;

/// Default number of entries for the most-copied listing.
const DEFAULT_TOP_LIMIT: i64 = 10;

/// Maximum number of entries for the most-copied listing.
const MAX_TOP_LIMIT: i64 = 100;

/// Read-only aggregates over the content and usage tables.
pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Entity counts for the dashboard summary cards.
    pub async fn summary(pool: &PgPool) -> Result<AnalyticsSummary, sqlx::Error> {
        sqlx::query_as::<_, AnalyticsSummary>(
            "SELECT
                (SELECT COUNT(*) FROM users) AS users,
                (SELECT COUNT(*) FROM categories) AS categories,
                (SELECT COUNT(*) FROM replies) AS replies,
                (SELECT COUNT(*) FROM products) AS products,
                (SELECT COUNT(*) FROM favorites) AS favorites,
                (SELECT COUNT(*) FROM copy_logs) AS copies",
        )
        .fetch_one(pool)
        .await
    }

    /// Copies per UTC calendar day over the trailing `days` window.
    ///
    /// Days with no copies are absent from the series; the client fills
    /// gaps when charting.
    pub async fn copies_per_day(
        pool: &PgPool,
        days: Option<i64>,
    ) -> Result<Vec<DailyCopyCount>, sqlx::Error> {
        let days = days.unwrap_or(DEFAULT_DAYS).clamp(1, MAX_DAYS);

        sqlx::query_as::<_, DailyCopyCount>(
            "SELECT (created_at AT TIME ZONE 'UTC')::DATE AS day, COUNT(*) AS copies
             FROM copy_logs
             WHERE created_at >= NOW() - ($1 * INTERVAL '1 day')
             GROUP BY day
             ORDER BY day ASC",
        )
        .bind(days)
        .fetch_all(pool)
        .await
    }

    /// The most-copied replies, descending by copy count.
    pub async fn top_replies(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<TopReply>, sqlx::Error> {
        let limit = limit.unwrap_or(DEFAULT_TOP_LIMIT).clamp(1, MAX_TOP_LIMIT);

        sqlx::query_as::<_, TopReply>(
            "SELECT r.id AS reply_id, r.title_en, r.title_ar, COUNT(c.id) AS copy_count
             FROM copy_logs c
             JOIN replies r ON r.id = c.reply_id
             GROUP BY r.id, r.title_en, r.title_ar
             ORDER BY copy_count DESC, r.id ASC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
