//! Route definitions for the `/admin` resource.
//!
//! Every handler behind this router takes [`RequireAdmin`], so a
//! non-admin caller gets a single 403 rejection regardless of path.
//!
//! [`RequireAdmin`]: crate::middleware::rbac::RequireAdmin

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{admin, analytics};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /users                       -> list users
/// POST   /users                       -> create user
/// GET    /users/{id}                  -> get user
/// PUT    /users/{id}                  -> update user
/// DELETE /users/{id}                  -> deactivate user
/// POST   /users/{id}/reset-password   -> reset password
///
/// GET    /replies                     -> unfiltered reply listing
/// PUT    /replies/{id}                -> update incl. visibility
///
/// GET    /products                    -> list incl. inactive
/// POST   /products                    -> create product
/// PUT    /products/{id}               -> update product
/// DELETE /products/{id}               -> delete product
///
/// GET    /analytics/summary           -> entity counts
/// GET    /analytics/copies-per-day    -> daily copy series
/// GET    /analytics/top-replies       -> most copied, localized titles
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        // User management.
        .route("/users", get(admin::list_users).post(admin::create_user))
        .route(
            "/users/{id}",
            get(admin::get_user)
                .put(admin::update_user)
                .delete(admin::deactivate_user),
        )
        .route("/users/{id}/reset-password", post(admin::reset_password))
        // Reply administration.
        .route("/replies", get(admin::list_replies))
        .route("/replies/{id}", put(admin::update_reply))
        // Product management.
        .route(
            "/products",
            get(admin::list_products).post(admin::create_product),
        )
        .route(
            "/products/{id}",
            put(admin::update_product).delete(admin::delete_product),
        )
        // Analytics.
        .route("/analytics/summary", get(analytics::summary))
        .route("/analytics/copies-per-day", get(analytics::copies_per_day))
        .route("/analytics/top-replies", get(analytics::top_replies))
}
