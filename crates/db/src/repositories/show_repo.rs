//! Repository for the `shows` catalog table.

use sqlx::PgPool;

use crate::models::show::{CreateShow, Show};

/// Column list for `shows` queries.
const SHOW_COLUMNS: &str = "id, title, description, image_url, genre, created_at";

/// Insert-only access to the show catalog.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show. Shows are immutable after creation.
    pub async fn create(pool: &PgPool, input: &CreateShow) -> Result<Show, sqlx::Error> {
        let query = format!(
            "INSERT INTO shows (title, description, image_url, genre) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {SHOW_COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.image_url.as_deref())
            .bind(input.genre.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Load the entire catalog. The daily draw shuffles the whole set, so
    /// there is no pagination here.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Show>, sqlx::Error> {
        let query = format!("SELECT {SHOW_COLUMNS} FROM shows ORDER BY id");
        sqlx::query_as::<_, Show>(&query).fetch_all(pool).await
    }
}
