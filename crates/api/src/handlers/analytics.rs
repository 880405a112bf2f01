//! Handlers for the `/admin/analytics` resource.
//!
//! Read-only aggregates over the content and usage tables, backing the
//! admin dashboard.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use radd_core::locale::Locale;
use radd_core::types::DbId;
use radd_db::models::analytics::{AnalyticsSummary, DailyCopyCount};
use radd_db::repositories::AnalyticsRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /admin/analytics/copies-per-day`.
#[derive(Debug, Default, Deserialize)]
pub struct CopiesPerDayParams {
    /// Trailing window length in days (default 30, max 365).
    pub days: Option<i64>,
}

/// Query parameters for `GET /admin/analytics/top-replies`.
#[derive(Debug, Default, Deserialize)]
pub struct TopRepliesParams {
    /// Number of entries (default 10, max 100).
    pub limit: Option<i64>,
    /// Language for the localized title (default `en`).
    #[serde(default)]
    pub lang: Locale,
}

/// A most-copied entry with its title already localized for the dashboard.
#[derive(Debug, Serialize)]
pub struct LocalizedTopReply {
    pub reply_id: DbId,
    pub title: String,
    pub copy_count: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/analytics/summary
///
/// Entity counts for the dashboard summary cards.
pub async fn summary(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<AnalyticsSummary>>> {
    let summary = AnalyticsRepo::summary(&state.pool).await?;
    Ok(Json(DataResponse { data: summary }))
}

/// GET /api/v1/admin/analytics/copies-per-day
///
/// Copies per UTC calendar day over the trailing window. Days with no
/// copies are absent; the client fills gaps when charting.
pub async fn copies_per_day(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<CopiesPerDayParams>,
) -> AppResult<Json<DataResponse<Vec<DailyCopyCount>>>> {
    let series = AnalyticsRepo::copies_per_day(&state.pool, params.days).await?;
    Ok(Json(DataResponse { data: series }))
}

/// GET /api/v1/admin/analytics/top-replies
///
/// The most-copied replies, with titles localized via the bilingual
/// selection rule (`?lang=`).
pub async fn top_replies(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<TopRepliesParams>,
) -> AppResult<Json<DataResponse<Vec<LocalizedTopReply>>>> {
    let rows = AnalyticsRepo::top_replies(&state.pool, params.limit).await?;

    let localized: Vec<LocalizedTopReply> = rows
        .into_iter()
        .map(|row| {
            let title = radd_core::bilingual::BilingualText::new(row.title_en, row.title_ar);
            LocalizedTopReply {
                reply_id: row.reply_id,
                title: title.select(params.lang).to_string(),
                copy_count: row.copy_count,
            }
        })
        .collect();

    Ok(Json(DataResponse { data: localized }))
}
