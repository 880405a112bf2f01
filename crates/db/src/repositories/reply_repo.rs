//! Repository for the `replies` table.
//!
//! Visibility: a user sees their own replies plus any reply flagged
//! `is_active`. Ownership checks for update/delete go through
//! `radd_core::authz`, the single authority for mutation permission.

use sqlx::PgPool;

use radd_core::authz;
use radd_core::error::CoreError;
use radd_core::types::DbId;

use crate::error::DbResult;
use crate::models::reply::{CreateReply, Reply, ReplyListParams, UpdateReply};
use crate::repositories::CategoryRepo;

/// Column list for `replies` queries.
const COLUMNS: &str = "id, title_en, title_ar, content_en, content_ar, \
                        category_id, created_by, is_active, created_at, updated_at";

/// Default page size for reply listing.
const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for reply listing.
const MAX_LIMIT: i64 = 200;

/// Provides CRUD operations for canned replies.
pub struct ReplyRepo;

impl ReplyRepo {
    /// Insert a new reply owned by `actor_id`.
    ///
    /// Title and content must each be populated in at least one language,
    /// and the target category must exist. `created_by` and `is_active`
    /// are assigned server-side; callers cannot supply them.
    pub async fn create(pool: &PgPool, actor_id: DbId, input: &CreateReply) -> DbResult<Reply> {
        input.title().validate_required("title")?;
        input.content().validate_required("content")?;

        if CategoryRepo::find_by_id(pool, input.category_id)
            .await?
            .is_none()
        {
            return Err(CoreError::NotFound {
                entity: "Category",
                id: input.category_id,
            }
            .into());
        }

        let query = format!(
            "INSERT INTO replies (title_en, title_ar, content_en, content_ar, category_id, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let reply = sqlx::query_as::<_, Reply>(&query)
            .bind(&input.title_en)
            .bind(&input.title_ar)
            .bind(&input.content_en)
            .bind(&input.content_ar)
            .bind(input.category_id)
            .bind(actor_id)
            .fetch_one(pool)
            .await?;
        Ok(reply)
    }

    /// Find a reply by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reply>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM replies WHERE id = $1");
        sqlx::query_as::<_, Reply>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the replies visible to `user_id`: their own plus active ones.
    ///
    /// Supports optional category and bilingual substring filters plus
    /// pagination. Re-querying is idempotent.
    pub async fn list_visible(
        pool: &PgPool,
        user_id: DbId,
        params: &ReplyListParams,
    ) -> Result<Vec<Reply>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = params.offset.unwrap_or(0).max(0);
        let pattern = params.search.as_ref().map(|s| format!("%{s}%"));

        let query = format!(
            "SELECT {COLUMNS} FROM replies
             WHERE (created_by = $1 OR is_active)
               AND ($2::BIGINT IS NULL OR category_id = $2)
               AND ($3::TEXT IS NULL
                    OR title_en ILIKE $3 OR title_ar ILIKE $3
                    OR content_en ILIKE $3 OR content_ar ILIKE $3)
             ORDER BY created_at DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Reply>(&query)
            .bind(user_id)
            .bind(params.category_id)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List every reply regardless of visibility (admin area).
    pub async fn list_all(
        pool: &PgPool,
        params: &ReplyListParams,
    ) -> Result<Vec<Reply>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = params.offset.unwrap_or(0).max(0);
        let pattern = params.search.as_ref().map(|s| format!("%{s}%"));

        let query = format!(
            "SELECT {COLUMNS} FROM replies
             WHERE ($1::BIGINT IS NULL OR category_id = $1)
               AND ($2::TEXT IS NULL
                    OR title_en ILIKE $2 OR title_ar ILIKE $2
                    OR content_en ILIKE $2 OR content_ar ILIKE $2)
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Reply>(&query)
            .bind(params.category_id)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a reply's fields. Only the owner or an admin may do so.
    ///
    /// A changed `category_id` must reference an existing category.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        actor_id: DbId,
        actor_role: &str,
        input: &UpdateReply,
    ) -> DbResult<Reply> {
        let existing = Self::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Reply", id })?;
        authz::ensure_can_mutate("reply", existing.created_by, actor_id, actor_role)?;

        if let Some(category_id) = input.category_id {
            if CategoryRepo::find_by_id(pool, category_id).await?.is_none() {
                return Err(CoreError::NotFound {
                    entity: "Category",
                    id: category_id,
                }
                .into());
            }
        }

        let query = format!(
            "UPDATE replies SET
                title_en = COALESCE($2, title_en),
                title_ar = COALESCE($3, title_ar),
                content_en = COALESCE($4, content_en),
                content_ar = COALESCE($5, content_ar),
                category_id = COALESCE($6, category_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let reply = sqlx::query_as::<_, Reply>(&query)
            .bind(id)
            .bind(&input.title_en)
            .bind(&input.title_ar)
            .bind(&input.content_en)
            .bind(&input.content_ar)
            .bind(input.category_id)
            .fetch_one(pool)
            .await?;
        Ok(reply)
    }

    /// Delete a reply. Only the owner or an admin may do so.
    pub async fn delete(
        pool: &PgPool,
        id: DbId,
        actor_id: DbId,
        actor_role: &str,
    ) -> DbResult<()> {
        let existing = Self::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Reply", id })?;
        authz::ensure_can_mutate("reply", existing.created_by, actor_id, actor_role)?;

        sqlx::query("DELETE FROM replies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Flip a reply's global visibility flag (admin path only; the route
    /// is gated, not this method).
    ///
    /// Returns `None` if no reply with the given ID exists.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        is_active: bool,
    ) -> Result<Option<Reply>, sqlx::Error> {
        let query = format!(
            "UPDATE replies SET is_active = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reply>(&query)
            .bind(id)
            .bind(is_active)
            .fetch_optional(pool)
            .await
    }
}
