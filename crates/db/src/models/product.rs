//! Product entity model and DTOs. Structurally the category pattern with
//! admin-only mutation.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use radd_core::bilingual::BilingualText;
use radd_core::types::{DbId, Timestamp};

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name_en: String,
    pub name_ar: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub created_by: DbId,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Product {
    pub fn name(&self) -> BilingualText {
        BilingualText::new(self.name_en.clone(), self.name_ar.clone())
    }
}

/// DTO for creating a product (admin only).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name_en: String,
    pub name_ar: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
}

impl CreateProduct {
    pub fn name(&self) -> BilingualText {
        BilingualText::new(self.name_en.clone(), self.name_ar.clone())
    }
}

/// DTO for updating a product (admin only). All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub name_en: Option<String>,
    pub name_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub is_active: Option<bool>,
}
