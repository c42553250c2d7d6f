//! Show catalog models and DTOs.

use primetime_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `shows` table.
///
/// Serialized in camelCase to match the public API (`imageUrl`, not
/// `image_url`).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub genre: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for the admin insert operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShow {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub genre: Option<String>,
}
