//! Copy-log model. Append-only from the application's perspective.

use serde::Serialize;
use sqlx::FromRow;

use radd_core::types::{DbId, Timestamp};

/// A row from the `copy_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CopyLog {
    pub id: DbId,
    pub user_id: DbId,
    pub reply_id: DbId,
    pub created_at: Timestamp,
}
