//! Route definition for vote submission.
//!
//! ```text
//! POST /vote -> submit_vote
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::votes;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/vote", post(votes::submit_vote))
}
