//! Route definition for the daily results.
//!
//! ```text
//! GET /results -> get_results
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::results;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/results", get(results::get_results))
}
