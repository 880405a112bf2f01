//! Route definitions for the `/replies` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::replies;
use crate::state::AppState;

/// Routes mounted at `/replies`.
///
/// `/favorites` is registered before `/{id}` so the literal segment is
/// not captured as an id.
///
/// ```text
/// GET    /                 -> list (visibility-filtered)
/// POST   /                 -> create
/// GET    /favorites        -> caller's favorited replies
/// PUT    /{id}             -> update (owner or admin)
/// DELETE /{id}             -> delete (owner or admin)
/// POST   /{id}/favorite    -> toggle favorite
/// POST   /{id}/copy        -> localized copy + log
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(replies::list).post(replies::create))
        .route("/favorites", get(replies::list_favorites))
        .route("/{id}", put(replies::update).delete(replies::delete))
        .route("/{id}/favorite", post(replies::toggle_favorite))
        .route("/{id}/copy", post(replies::copy))
}
