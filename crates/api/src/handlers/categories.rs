//! Handlers for the `/categories` resource.
//!
//! Categories are listed globally but mutations are ownership-gated in
//! `CategoryRepo`; a handler never re-checks permission itself.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use radd_core::types::DbId;
use radd_db::models::category::{Category, CreateCategory, UpdateCategory};
use radd_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/categories
///
/// Creates a category owned by the authenticated user. The bilingual name
/// must be populated in at least one language.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<DataResponse<Category>>)> {
    let category = CategoryRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// PUT /api/v1/categories/{id}
///
/// Owner-or-admin only; the repository enforces it.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<DataResponse<Category>>> {
    let category =
        CategoryRepo::update(&state.pool, id, user.user_id, &user.role, &input).await?;
    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/categories/{id}
///
/// Owner-or-admin only. Cascade deletes the replies filed under the
/// category. Returns 204 No Content.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    CategoryRepo::delete(&state.pool, id, user.user_id, &user.role).await?;
    Ok(StatusCode::NO_CONTENT)
}
