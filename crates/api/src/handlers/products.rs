//! Handlers for the `/products` resource (read-only outside the admin area).

use axum::extract::State;
use axum::Json;
use radd_db::models::product::Product;
use radd_db::repositories::ProductRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/products
///
/// Lists active products for any authenticated user. Inactive products
/// only appear in the admin listing.
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Product>>>> {
    let products = ProductRepo::list(&state.pool, false).await?;
    Ok(Json(DataResponse { data: products }))
}
