//! Repository for the `products` table.
//!
//! Products follow the category CRUD pattern but every mutation is
//! admin-only; there is no per-row owner exception.

use sqlx::PgPool;

use radd_core::authz;
use radd_core::error::CoreError;
use radd_core::types::DbId;

use crate::error::DbResult;
use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list for `products` queries.
const COLUMNS: &str = "id, name_en, name_ar, description_en, description_ar, \
                        created_by, is_active, created_at, updated_at";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product. Admin only.
    pub async fn create(
        pool: &PgPool,
        actor_id: DbId,
        actor_role: &str,
        input: &CreateProduct,
    ) -> DbResult<Product> {
        authz::ensure_admin("create products", actor_role)?;
        input.name().validate_required("name")?;

        let query = format!(
            "INSERT INTO products (name_en, name_ar, description_en, description_ar, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(&input.name_en)
            .bind(&input.name_ar)
            .bind(&input.description_en)
            .bind(&input.description_ar)
            .bind(actor_id)
            .fetch_one(pool)
            .await?;
        Ok(product)
    }

    /// Find a product by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List products ordered by English name.
    ///
    /// The public listing excludes inactive products; the admin area
    /// passes `include_inactive = true`.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE ($1 OR is_active)
             ORDER BY name_en ASC"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Update a product. Admin only; only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        actor_role: &str,
        input: &UpdateProduct,
    ) -> DbResult<Product> {
        authz::ensure_admin("update products", actor_role)?;

        let query = format!(
            "UPDATE products SET
                name_en = COALESCE($2, name_en),
                name_ar = COALESCE($3, name_ar),
                description_en = COALESCE($4, description_en),
                description_ar = COALESCE($5, description_ar),
                is_active = COALESCE($6, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name_en)
            .bind(&input.name_ar)
            .bind(&input.description_en)
            .bind(&input.description_ar)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Product",
                id,
            })?;
        Ok(product)
    }

    /// Delete a product. Admin only.
    pub async fn delete(pool: &PgPool, id: DbId, actor_role: &str) -> DbResult<()> {
        authz::ensure_admin("delete products", actor_role)?;

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: "Product",
                id,
            }
            .into());
        }
        Ok(())
    }
}
