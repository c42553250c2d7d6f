//! Handlers for the daily slate and the admin catalog insert.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use primetime_core::clock::Clock;
use primetime_core::error::CoreError;
use primetime_core::slate::draw_slate;
use primetime_db::models::show::{CreateShow, Show};
use primetime_db::repositories::{SelectionRepo, ShowRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::identity::Identity;
use crate::state::AppState;

/// GET /api/daily-shows
///
/// Return today's slate, creating it on the first request of the day.
/// The identity extractor is unused beyond forcing the middleware to
/// issue a credential, so a user can vote right after loading the slate.
pub async fn daily_shows(
    _identity: Identity,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Show>>> {
    let today = state.clock.today();

    if let Some(selection) = SelectionRepo::find_by_date(&state.pool, today).await? {
        let shows = SelectionRepo::shows_for(&state.pool, selection.id).await?;
        return Ok(Json(shows));
    }

    // First request of the day: draw a fresh slate from the catalog.
    let catalog = ShowRepo::list_all(&state.pool).await?;
    let slate = draw_slate(catalog, state.config.slate_size, &mut rand::rng());
    let show_ids: Vec<_> = slate.iter().map(|s| s.id).collect();

    match SelectionRepo::create(&state.pool, today, &show_ids).await? {
        Some(selection) => {
            tracing::info!(
                selection_id = selection.id,
                date = %today,
                count = slate.len(),
                "Daily selection created",
            );
            Ok(Json(slate))
        }
        None => {
            // A concurrent request created today's selection first; serve
            // the winner's slate instead of our discarded draw.
            let selection = SelectionRepo::find_by_date(&state.pool, today)
                .await?
                .ok_or_else(|| {
                    AppError::Core(CoreError::Internal(
                        "daily selection vanished after create conflict".into(),
                    ))
                })?;
            let shows = SelectionRepo::shows_for(&state.pool, selection.id).await?;
            Ok(Json(shows))
        }
    }
}

/// POST /api/admin/shows
///
/// Insert a show into the catalog. An admin placeholder for seeding; it
/// carries no authentication yet.
pub async fn create_show(
    State(state): State<AppState>,
    Json(input): Json<CreateShow>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".into(),
        )));
    }
    if input.description.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "description must not be empty".into(),
        )));
    }

    let show = ShowRepo::create(&state.pool, &input).await?;

    tracing::info!(show_id = show.id, title = %show.title, "Show added to catalog");

    Ok((StatusCode::CREATED, Json(show)))
}
