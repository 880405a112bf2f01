//! Error type for repository operations.
//!
//! Repositories that enforce the authorization gate or validate input can
//! fail with a domain error as well as a database error; this wrapper keeps
//! both transparent so callers can map them independently.

use radd_core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Convenience type alias for gated repository methods.
pub type DbResult<T> = Result<T, DbError>;
