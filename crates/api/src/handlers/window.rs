//! Window snapshot handler.
//!
//! Clients poll this once a minute to drive the vote/results toggle and
//! the countdown to the reveal, instead of hardcoding the hour constants
//! client-side.

use axum::extract::State;
use axum::Json;
use chrono::Timelike;
use primetime_core::clock::Clock;
use primetime_core::types::Timestamp;
use primetime_core::window::{self, WindowState};
use serde::Serialize;

use crate::state::AppState;

/// Snapshot of the voting window as of `server_time`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowResponse {
    pub state: WindowState,
    pub server_time: Timestamp,
    pub voting_opens_at: Timestamp,
    pub voting_closes_at: Timestamp,
    pub results_available_at: Timestamp,
}

/// GET /api/window
pub async fn get_window(State(state): State<AppState>) -> Json<WindowResponse> {
    let now = state.clock.now();
    let today = now.date_naive();

    Json(WindowResponse {
        state: window::classify(now.hour()),
        server_time: now,
        voting_opens_at: window::voting_opens_at(today),
        voting_closes_at: window::voting_closes_at(today),
        results_available_at: window::reveal_time(today),
    })
}
