//! Route definitions for the show catalog and daily slate.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::shows;
use crate::state::AppState;

/// Daily slate route, mounted behind the identity middleware.
///
/// ```text
/// GET /daily-shows -> daily_shows
/// ```
pub fn daily_router() -> Router<AppState> {
    Router::new().route("/daily-shows", get(shows::daily_shows))
}

/// Admin catalog route (no identity cookie needed).
///
/// ```text
/// POST /admin/shows -> create_show
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/admin/shows", post(shows::create_show))
}
