//! Game Error Types
//!
//! Game-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Game-specific result type alias
pub type GuessResult<T> = Result<T, GuessError>;

#[derive(Debug, Error)]
pub enum GuessError {
    /// The submitted guess is not an integer
    #[error("Please submit a valid number.")]
    InvalidInput,

    /// The session store failed
    #[error("Session store error: {0}")]
    Store(String),
}

impl GuessError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GuessError::InvalidInput => StatusCode::BAD_REQUEST,
            GuessError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GuessError::InvalidInput => ErrorKind::BadRequest,
            GuessError::Store(_) => ErrorKind::ServiceUnavailable,
        }
    }

    fn log(&self) {
        match self {
            GuessError::Store(msg) => {
                tracing::error!(message = %msg, "Game session store error");
            }
            GuessError::InvalidInput => {
                tracing::debug!(error = %self, "Game error");
            }
        }
    }
}

impl From<GuessError> for AppError {
    fn from(err: GuessError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            GuessError::InvalidInput => {
                AppError::new(kind, message).with_action("Enter a whole number")
            }
            GuessError::Store(_) => AppError::new(kind, message).with_action("Please try again"),
        }
    }
}

impl IntoResponse for GuessError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
