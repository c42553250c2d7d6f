//! Vote models and DTOs.

use chrono::NaiveDate;
use primetime_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `votes` table. Immutable once created; uniqueness per
/// (user, day) is enforced by `uq_votes_user_day`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub id: DbId,
    pub show_id: DbId,
    pub user_id: UserId,
    pub vote_day: NaiveDate,
    pub created_at: Timestamp,
}

/// DTO for `POST /api/vote`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVote {
    pub show_id: DbId,
}

/// One entry of the daily results: a show joined with its vote count.
#[derive(Debug, Clone, Serialize)]
pub struct ShowResult {
    pub show: super::show::Show,
    pub votes: i64,
}
