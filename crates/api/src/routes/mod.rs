pub mod admin;
pub mod auth;
pub mod categories;
pub mod health;
pub mod products;
pub mod replies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
///
/// /categories                          list, create (auth required)
/// /categories/{id}                     update, delete (owner or admin)
///
/// /replies                             list (visible), create (auth required)
/// /replies/favorites                   caller's favorited replies (GET)
/// /replies/{id}                        update, delete (owner or admin)
/// /replies/{id}/favorite               toggle favorite (POST)
/// /replies/{id}/copy                   localized copy + log (POST)
///
/// /products                            list active products (auth required)
///
/// /admin/users                         list, create (admin only)
/// /admin/users/{id}                    get, update, deactivate
/// /admin/users/{id}/reset-password     reset password (POST)
/// /admin/replies                       unfiltered listing (GET)
/// /admin/replies/{id}                  update incl. visibility (PUT)
/// /admin/products                      list incl. inactive, create
/// /admin/products/{id}                 update, delete
/// /admin/analytics/summary             entity counts (GET)
/// /admin/analytics/copies-per-day      daily copy series (GET)
/// /admin/analytics/top-replies         most copied, localized (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/categories", categories::router())
        .nest("/replies", replies::router())
        .nest("/products", products::router())
        .nest("/admin", admin::router())
}
