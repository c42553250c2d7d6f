//! Repository for the `votes` table and the daily tally.

use chrono::NaiveDate;
use primetime_core::types::{DbId, Timestamp};
use sqlx::{FromRow, PgPool};

use crate::models::show::Show;
use crate::models::vote::ShowResult;

/// Flat row produced by the tally join before it is folded into
/// [`ShowResult`].
#[derive(Debug, FromRow)]
struct TallyRow {
    id: DbId,
    title: String,
    description: String,
    image_url: Option<String>,
    genre: Option<String>,
    created_at: Timestamp,
    votes: i64,
}

/// Insert-only access to votes plus the results aggregation.
pub struct VoteRepo;

impl VoteRepo {
    /// Whether the user has already voted on the given day.
    pub async fn exists_for_user_day(
        pool: &PgPool,
        user_id: &str,
        day: NaiveDate,
    ) -> Result<bool, sqlx::Error> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM votes WHERE user_id = $1 AND vote_day = $2")
                .bind(user_id)
                .bind(day)
                .fetch_one(pool)
                .await?;
        Ok(count > 0)
    }

    /// Record a vote. Returns `false` when the (user, day) slot is already
    /// taken: the handler's pre-check can race with a concurrent vote, so
    /// the insert relies on `uq_votes_user_day` rather than the check.
    pub async fn insert(
        pool: &PgPool,
        show_id: DbId,
        user_id: &str,
        day: NaiveDate,
        cast_at: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO votes (show_id, user_id, vote_day, created_at) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (user_id, vote_day) DO NOTHING",
        )
        .bind(show_id)
        .bind(user_id)
        .bind(day)
        .bind(cast_at)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Tally the day's votes per show, most-voted first (title as a
    /// deterministic tie-break). Shows without votes do not appear.
    pub async fn tally_for_day(
        pool: &PgPool,
        day: NaiveDate,
    ) -> Result<Vec<ShowResult>, sqlx::Error> {
        let rows = sqlx::query_as::<_, TallyRow>(
            "SELECT s.id, s.title, s.description, s.image_url, s.genre, s.created_at, \
                    COUNT(v.id) AS votes \
             FROM votes v \
             JOIN shows s ON s.id = v.show_id \
             WHERE v.vote_day = $1 \
             GROUP BY s.id, s.title, s.description, s.image_url, s.genre, s.created_at \
             ORDER BY votes DESC, s.title ASC",
        )
        .bind(day)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| ShowResult {
                show: Show {
                    id: row.id,
                    title: row.title,
                    description: row.description,
                    image_url: row.image_url,
                    genre: row.genre,
                    created_at: row.created_at,
                },
                votes: row.votes,
            })
            .collect())
    }
}
