//! Category entity model and DTOs.
//!
//! Categories carry bilingual names (and optional descriptions) stored as
//! parallel `*_en` / `*_ar` columns. The wire format stays flat to match
//! the table; [`Category::name`] assembles a [`BilingualText`] for
//! locale-aware selection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use radd_core::bilingual::BilingualText;
use radd_core::types::{DbId, Timestamp};

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name_en: String,
    pub name_ar: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Category {
    pub fn name(&self) -> BilingualText {
        BilingualText::new(self.name_en.clone(), self.name_ar.clone())
    }
}

/// DTO for creating a category. `created_by` is always the acting user,
/// never caller-supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name_en: String,
    pub name_ar: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
}

impl CreateCategory {
    pub fn name(&self) -> BilingualText {
        BilingualText::new(self.name_en.clone(), self.name_ar.clone())
    }
}

/// DTO for updating a category. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub name_en: Option<String>,
    pub name_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
}
