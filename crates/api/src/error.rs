use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use primetime_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain conditions and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses of the form `{"error": ..., "code": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `primetime_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::VotingClosed => {
                    (StatusCode::FORBIDDEN, "VOTING_CLOSED", core.to_string())
                }
                CoreError::AlreadyVoted => {
                    (StatusCode::FORBIDDEN, "ALREADY_VOTED", core.to_string())
                }
                CoreError::InvalidShow => {
                    (StatusCode::BAD_REQUEST, "INVALID_SHOW", core.to_string())
                }
                CoreError::ResultsNotYetAvailable { available_at } => {
                    // The reveal timestamp rides along so clients can
                    // show a countdown.
                    let body = json!({
                        "error": core.to_string(),
                        "code": "RESULTS_NOT_YET_AVAILABLE",
                        "availableAt": available_at,
                    });
                    return (StatusCode::FORBIDDEN, axum::Json(body)).into_response();
                }
                CoreError::NoSelectionToday => {
                    (StatusCode::NOT_FOUND, "NO_SELECTION_TODAY", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - A unique violation on `uq_votes_user_day` means a concurrent vote
///   won the (user, day) slot; surface it exactly like the sequential
///   duplicate-vote case.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505.
            if db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some("uq_votes_user_day")
            {
                return (
                    StatusCode::FORBIDDEN,
                    "ALREADY_VOTED",
                    CoreError::AlreadyVoted.to_string(),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
