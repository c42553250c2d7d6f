//! Route definition for the voting-window snapshot.
//!
//! ```text
//! GET /window -> get_window
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::window;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/window", get(window::get_window))
}
