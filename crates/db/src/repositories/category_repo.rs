//! Repository for the `categories` table.
//!
//! Mutations are ownership-gated: update and delete verify the acting user
//! against `radd_core::authz` before any SQL runs. Handlers never repeat
//! that check.

use sqlx::PgPool;

use radd_core::authz;
use radd_core::error::CoreError;
use radd_core::types::DbId;

use crate::error::DbResult;
use crate::models::category::{Category, CreateCategory, UpdateCategory};

/// Column list for `categories` queries.
const COLUMNS: &str = "id, name_en, name_ar, description_en, description_ar, \
                        created_by, created_at, updated_at";

/// Provides CRUD operations for reply categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category owned by `actor_id`.
    ///
    /// The bilingual name must be populated in at least one language.
    /// `created_by` is always the acting user; callers cannot supply it.
    pub async fn create(
        pool: &PgPool,
        actor_id: DbId,
        input: &CreateCategory,
    ) -> DbResult<Category> {
        input.name().validate_required("name")?;

        let query = format!(
            "INSERT INTO categories (name_en, name_ar, description_en, description_ar, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(&input.name_en)
            .bind(&input.name_ar)
            .bind(&input.description_en)
            .bind(&input.description_ar)
            .bind(actor_id)
            .fetch_one(pool)
            .await?;
        Ok(category)
    }

    /// Find a category by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories ordered by English name.
    ///
    /// Re-querying is idempotent; the listing carries no cursor state.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name_en ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Update a category. Only the owner or an admin may do so.
    ///
    /// Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        actor_id: DbId,
        actor_role: &str,
        input: &UpdateCategory,
    ) -> DbResult<Category> {
        let existing = Self::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Category",
                id,
            })?;
        authz::ensure_can_mutate("category", existing.created_by, actor_id, actor_role)?;

        let query = format!(
            "UPDATE categories SET
                name_en = COALESCE($2, name_en),
                name_ar = COALESCE($3, name_ar),
                description_en = COALESCE($4, description_en),
                description_ar = COALESCE($5, description_ar),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name_en)
            .bind(&input.name_ar)
            .bind(&input.description_en)
            .bind(&input.description_ar)
            .fetch_one(pool)
            .await?;
        Ok(category)
    }

    /// Delete a category. Only the owner or an admin may do so.
    ///
    /// Cascade deletes the replies filed under it.
    pub async fn delete(
        pool: &PgPool,
        id: DbId,
        actor_id: DbId,
        actor_role: &str,
    ) -> DbResult<()> {
        let existing = Self::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Category",
                id,
            })?;
        authz::ensure_can_mutate("category", existing.created_by, actor_id, actor_role)?;

        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
