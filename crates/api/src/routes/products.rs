//! Route definitions for the `/products` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET /  -> list active products (auth required)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(products::list))
}
