//! Category types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Post category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    /// Category ID.
    pub id: String,
    /// Unique display name. Posts reference categories by name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "super::optional_timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

/// Request body for creating a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}
