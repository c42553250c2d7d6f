//! Domain logic for the daily show-voting service.
//!
//! Everything here is pure and database-free: the error taxonomy, the
//! voting-window classification, the slate draw, and the clock seam the
//! api crate injects so window transitions are testable without waiting
//! for wall-clock time.

pub mod clock;
pub mod error;
pub mod slate;
pub mod types;
pub mod window;
