//! Daily selection models.
//!
//! The slate's show membership is not embedded here; it lives in the
//! `daily_selection_shows` junction table and is fetched ordered by
//! `position` via [`crate::repositories::SelectionRepo::shows_for`].

use chrono::NaiveDate;
use primetime_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `daily_selections` table. At most one exists per
/// calendar date; created lazily and never mutated afterward.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySelection {
    pub id: DbId,
    pub selection_date: NaiveDate,
    pub created_at: Timestamp,
}
