//! Favorite relation model.

use serde::Serialize;
use sqlx::FromRow;

use radd_core::types::{DbId, Timestamp};

/// A row from the `favorites` table. Unique per (user, reply); rows are
/// only ever inserted or deleted, never updated.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    pub reply_id: DbId,
    pub created_at: Timestamp,
}
