//! Vote submission handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Timelike;
use primetime_core::clock::Clock;
use primetime_core::error::CoreError;
use primetime_core::window;
use primetime_db::models::vote::CastVote;
use primetime_db::repositories::{SelectionRepo, VoteRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::identity::Identity;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/vote
///
/// Checks run in a fixed order: window open, not already voted, show in
/// today's slate. The final insert still goes through the
/// `uq_votes_user_day` constraint, so two concurrent votes from the same
/// user cannot both land even though both pass the pre-check.
pub async fn submit_vote(
    identity: Identity,
    State(state): State<AppState>,
    Json(input): Json<CastVote>,
) -> AppResult<impl IntoResponse> {
    let now = state.clock.now();

    if !window::classify(now.hour()).voting_open() {
        return Err(AppError::Core(CoreError::VotingClosed));
    }

    let today = now.date_naive();

    if VoteRepo::exists_for_user_day(&state.pool, &identity.user_id, today).await? {
        return Err(AppError::Core(CoreError::AlreadyVoted));
    }

    let selection = SelectionRepo::find_by_date(&state.pool, today)
        .await?
        .ok_or(AppError::Core(CoreError::InvalidShow))?;

    if !SelectionRepo::contains_show(&state.pool, selection.id, input.show_id).await? {
        return Err(AppError::Core(CoreError::InvalidShow));
    }

    let inserted =
        VoteRepo::insert(&state.pool, input.show_id, &identity.user_id, today, now).await?;
    if !inserted {
        // Lost a race with the user's own concurrent vote.
        return Err(AppError::Core(CoreError::AlreadyVoted));
    }

    tracing::info!(show_id = input.show_id, date = %today, "Vote recorded");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Vote recorded successfully.",
        }),
    ))
}
