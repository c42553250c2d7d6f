//! Shared response types for API handlers.

use serde::Serialize;

/// Simple `{ "message": ... }` acknowledgement body, used by the vote
/// endpoint's 201 response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
