use crate::types::Timestamp;

/// Domain errors surfaced to API clients. The messages are user-facing
/// copy, so they stay in plain 12-hour phrasing rather than echoing the
/// hour constants.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Voting is closed. Voting is open from 6am to 6pm.")]
    VotingClosed,

    #[error("You have already voted today.")]
    AlreadyVoted,

    #[error("Invalid show selection.")]
    InvalidShow,

    #[error("Results will be available at 7pm.")]
    ResultsNotYetAvailable { available_at: Timestamp },

    #[error("No shows were selected today.")]
    NoSelectionToday,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
