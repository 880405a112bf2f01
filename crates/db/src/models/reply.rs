//! Reply entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use radd_core::bilingual::BilingualText;
use radd_core::types::{DbId, Timestamp};

/// A row from the `replies` table.
///
/// A reply is private to its creator unless `is_active` makes it globally
/// visible; the visibility filter lives in `ReplyRepo::list_visible`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reply {
    pub id: DbId,
    pub title_en: String,
    pub title_ar: String,
    pub content_en: String,
    pub content_ar: String,
    pub category_id: DbId,
    pub created_by: DbId,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Reply {
    pub fn title(&self) -> BilingualText {
        BilingualText::new(self.title_en.clone(), self.title_ar.clone())
    }

    pub fn content(&self) -> BilingualText {
        BilingualText::new(self.content_en.clone(), self.content_ar.clone())
    }
}

/// DTO for creating a reply. `created_by` and `is_active` are assigned
/// server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReply {
    pub title_en: String,
    pub title_ar: String,
    pub content_en: String,
    pub content_ar: String,
    pub category_id: DbId,
}

impl CreateReply {
    pub fn title(&self) -> BilingualText {
        BilingualText::new(self.title_en.clone(), self.title_ar.clone())
    }

    pub fn content(&self) -> BilingualText {
        BilingualText::new(self.content_en.clone(), self.content_ar.clone())
    }
}

/// DTO for updating a reply's own fields. Visibility (`is_active`) is
/// changed only through `ReplyRepo::set_active` on the admin path.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReply {
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub content_en: Option<String>,
    pub content_ar: Option<String>,
    pub category_id: Option<DbId>,
}

/// Filter parameters for reply listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplyListParams {
    pub category_id: Option<DbId>,
    /// Case-insensitive substring match across all four bilingual columns.
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
