pub mod health;
pub mod results;
pub mod shows;
pub mod votes;
pub mod window;

use axum::Router;

use crate::middleware::identity::issue_identity;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /daily-shows    today's slate (GET, issues identity cookie)
/// /vote           cast a vote (POST, issues identity cookie)
/// /results        daily tally after the reveal hour (GET)
/// /window         voting-window snapshot (GET)
/// /admin/shows    insert a catalog show (POST, placeholder auth)
/// ```
///
/// The identity middleware is scoped to the credential-bearing routes via
/// `route_layer`, so unmatched paths and the public endpoints never set
/// cookies.
pub fn api_routes(state: &AppState) -> Router<AppState> {
    let identity = axum::middleware::from_fn_with_state(state.clone(), issue_identity);

    Router::new()
        .merge(shows::daily_router().route_layer(identity.clone()))
        .merge(votes::router().route_layer(identity))
        .merge(results::router())
        .merge(window::router())
        .merge(shows::admin_router())
}
