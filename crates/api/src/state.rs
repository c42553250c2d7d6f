use std::sync::Arc;

use primetime_core::clock::Clock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: primetime_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Wall-clock source. Production uses `SystemClock`; tests pin a
    /// `FixedClock` so window transitions are deterministic.
    pub clock: Arc<dyn Clock>,
}
