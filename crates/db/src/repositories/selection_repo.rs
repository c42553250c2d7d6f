//! Repository for `daily_selections` and its ordered show membership.

use chrono::NaiveDate;
use primetime_core::types::DbId;
use sqlx::PgPool;

use crate::models::daily_selection::DailySelection;
use crate::models::show::Show;

/// Column list for `daily_selections` queries.
const SELECTION_COLUMNS: &str = "id, selection_date, created_at";

/// Access to the one-per-day slate records.
pub struct SelectionRepo;

impl SelectionRepo {
    /// Find the selection for a calendar day, if one has been created.
    pub async fn find_by_date(
        pool: &PgPool,
        day: NaiveDate,
    ) -> Result<Option<DailySelection>, sqlx::Error> {
        let query = format!(
            "SELECT {SELECTION_COLUMNS} FROM daily_selections WHERE selection_date = $1"
        );
        sqlx::query_as::<_, DailySelection>(&query)
            .bind(day)
            .fetch_optional(pool)
            .await
    }

    /// Create the selection for a day, recording the given shows in the
    /// given order.
    ///
    /// Returns `None` when another request created the day's selection
    /// first: the insert uses `ON CONFLICT (selection_date) DO NOTHING`,
    /// so the loser of the race sees no row and should re-read via
    /// [`Self::find_by_date`]. The selection row and its membership are
    /// written in one transaction, so a selection is never observable
    /// half-populated.
    pub async fn create(
        pool: &PgPool,
        day: NaiveDate,
        show_ids: &[DbId],
    ) -> Result<Option<DailySelection>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO daily_selections (selection_date) VALUES ($1) \
             ON CONFLICT (selection_date) DO NOTHING \
             RETURNING {SELECTION_COLUMNS}"
        );
        let selection = sqlx::query_as::<_, DailySelection>(&query)
            .bind(day)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(selection) = selection else {
            // Lost the race; nothing to write.
            tx.rollback().await?;
            return Ok(None);
        };

        for (position, show_id) in show_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO daily_selection_shows (selection_id, show_id, position) \
                 VALUES ($1, $2, $3)",
            )
            .bind(selection.id)
            .bind(show_id)
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(Some(selection))
    }

    /// The selection's shows in stored (shuffle) order.
    pub async fn shows_for(pool: &PgPool, selection_id: DbId) -> Result<Vec<Show>, sqlx::Error> {
        sqlx::query_as::<_, Show>(
            "SELECT s.id, s.title, s.description, s.image_url, s.genre, s.created_at \
             FROM daily_selection_shows dss \
             JOIN shows s ON s.id = dss.show_id \
             WHERE dss.selection_id = $1 \
             ORDER BY dss.position",
        )
        .bind(selection_id)
        .fetch_all(pool)
        .await
    }

    /// Whether a show belongs to the given selection.
    pub async fn contains_show(
        pool: &PgPool,
        selection_id: DbId,
        show_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM daily_selection_shows \
             WHERE selection_id = $1 AND show_id = $2",
        )
        .bind(selection_id)
        .bind(show_id)
        .fetch_one(pool)
        .await?;
        Ok(count > 0)
    }
}
