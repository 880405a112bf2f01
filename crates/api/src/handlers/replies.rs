//! Handlers for the `/replies` resource.
//!
//! Listing is visibility-filtered (own replies plus globally active ones).
//! Favorites toggle per (user, reply); copying returns the localized
//! content and logs the event fire-and-forget.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use radd_core::error::CoreError;
use radd_core::locale::{Direction, Locale};
use radd_core::types::DbId;
use radd_db::models::reply::{CreateReply, Reply, ReplyListParams, UpdateReply};
use radd_db::repositories::{CopyLogRepo, FavoriteRepo, ReplyRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /replies/{id}/copy`.
#[derive(Debug, Deserialize)]
pub struct CopyRequest {
    /// Requested content language; falls back to the other side when blank.
    #[serde(default)]
    pub lang: Locale,
}

/// Response body for `POST /replies/{id}/copy`.
#[derive(Debug, Serialize)]
pub struct CopyResponse {
    /// Content in the selected language (after fallback).
    pub content: String,
    /// Rendering direction of the returned text (`ltr` or `rtl`).
    pub direction: Direction,
}

/// Response body for `POST /replies/{id}/favorite`.
#[derive(Debug, Serialize)]
pub struct FavoriteStatus {
    /// New membership state: `true` when the reply is now a favorite.
    pub favorited: bool,
}

// ---------------------------------------------------------------------------
// CRUD handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/replies
///
/// Lists the replies visible to the caller: their own plus active ones.
/// Supports `?category_id=`, `?search=`, `?limit=`, `?offset=`.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<ReplyListParams>,
) -> AppResult<Json<DataResponse<Vec<Reply>>>> {
    let replies = ReplyRepo::list_visible(&state.pool, user.user_id, &params).await?;
    Ok(Json(DataResponse { data: replies }))
}

/// POST /api/v1/replies
///
/// Creates a reply owned by the authenticated user. Ownership comes from
/// the token; any caller-supplied value is structurally impossible (the
/// DTO has no such field).
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateReply>,
) -> AppResult<(StatusCode, Json<DataResponse<Reply>>)> {
    let reply = ReplyRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: reply })))
}

/// PUT /api/v1/replies/{id}
///
/// Owner-or-admin only; the repository enforces it.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReply>,
) -> AppResult<Json<DataResponse<Reply>>> {
    let reply = ReplyRepo::update(&state.pool, id, user.user_id, &user.role, &input).await?;
    Ok(Json(DataResponse { data: reply }))
}

/// DELETE /api/v1/replies/{id}
///
/// Owner-or-admin only. Returns 204 No Content.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ReplyRepo::delete(&state.pool, id, user.user_id, &user.role).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

/// POST /api/v1/replies/{id}/favorite
///
/// Toggles favorite membership for the caller and returns the new state.
/// Toggling twice restores the original state.
pub async fn toggle_favorite(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<FavoriteStatus>>> {
    // 404 early rather than surfacing an FK violation as a 500.
    find_visible_reply(&state, id, user.user_id).await?;

    let favorited = FavoriteRepo::toggle(&state.pool, user.user_id, id).await?;
    Ok(Json(DataResponse {
        data: FavoriteStatus { favorited },
    }))
}

/// GET /api/v1/replies/favorites
///
/// Lists the caller's favorited replies, most recently favorited first.
pub async fn list_favorites(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Reply>>>> {
    let replies = FavoriteRepo::list_replies(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: replies }))
}

// ---------------------------------------------------------------------------
// Copy
// ---------------------------------------------------------------------------

/// POST /api/v1/replies/{id}/copy
///
/// Returns the reply content in the requested language (with fallback)
/// plus its rendering direction, and appends a copy-log row. A failed log
/// write is non-fatal: the user-facing copy already happened, so the
/// handler only warns and still returns the content.
pub async fn copy(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CopyRequest>,
) -> AppResult<Json<DataResponse<CopyResponse>>> {
    let reply = find_visible_reply(&state, id, user.user_id).await?;

    let content = reply.content();
    let selected = content.select(input.lang).to_string();
    let direction = content.resolved_locale(input.lang).direction();

    if let Err(e) = CopyLogRepo::record(&state.pool, user.user_id, id).await {
        tracing::warn!(reply_id = id, error = %e, "Failed to record copy log");
    }

    Ok(Json(DataResponse {
        data: CopyResponse {
            content: selected,
            direction,
        },
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch a reply the caller is allowed to see, or 404.
///
/// Inactive replies belonging to someone else are indistinguishable from
/// missing ones.
async fn find_visible_reply(state: &AppState, id: DbId, user_id: DbId) -> AppResult<Reply> {
    let reply = ReplyRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|r| r.created_by == user_id || r.is_active)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Reply", id }))?;
    Ok(reply)
}
