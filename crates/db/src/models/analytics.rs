//! Aggregate rows returned by the admin analytics queries.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use radd_core::types::DbId;

/// Entity counts for the admin dashboard summary.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnalyticsSummary {
    pub users: i64,
    pub categories: i64,
    pub replies: i64,
    pub products: i64,
    pub favorites: i64,
    pub copies: i64,
}

/// Copy count for a single calendar day (UTC).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyCopyCount {
    pub day: NaiveDate,
    pub copies: i64,
}

/// A reply ranked by how often it was copied.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TopReply {
    pub reply_id: DbId,
    pub title_en: String,
    pub title_ar: String,
    pub copy_count: i64,
}
