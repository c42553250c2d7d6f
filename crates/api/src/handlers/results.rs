//! Results handler: the daily tally, gated on the reveal hour.

use axum::extract::State;
use axum::Json;
use chrono::Timelike;
use primetime_core::clock::Clock;
use primetime_core::error::CoreError;
use primetime_core::window;
use primetime_db::models::vote::ShowResult;
use primetime_db::repositories::{SelectionRepo, VoteRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/results
///
/// Available from 19:00; until then the response carries the reveal
/// timestamp so clients can show a countdown.
pub async fn get_results(State(state): State<AppState>) -> AppResult<Json<Vec<ShowResult>>> {
    let now = state.clock.now();
    let today = now.date_naive();

    if !window::classify(now.hour()).results_available() {
        return Err(AppError::Core(CoreError::ResultsNotYetAvailable {
            available_at: window::reveal_time(today),
        }));
    }

    if SelectionRepo::find_by_date(&state.pool, today).await?.is_none() {
        return Err(AppError::Core(CoreError::NoSelectionToday));
    }

    let results = VoteRepo::tally_for_day(&state.pool, today).await?;
    Ok(Json(results))
}
