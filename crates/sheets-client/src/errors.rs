//! Error types and retry classification for the sheets client.

use mutabaah_core::models::JournalValidationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by the data client.
///
/// Transport failures and non-success HTTP statuses are transient as far as
/// the spreadsheet web app is concerned (it answers 5xx/302 under load) and
/// are retried with backoff. Envelope rejections and decode failures are
/// terminal: the request reached the backend and retrying will not change
/// the answer.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("HTTP error! status: {status}")]
    Http { status: reqwest::StatusCode },

    /// The request never completed at the transport level.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered `status: "error"` in the response envelope.
    #[error("Backend rejected the request: {message}")]
    Rejected { message: String },

    /// The response body was not the expected envelope.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The payload failed local validation before it was ever sent.
    #[error("Invalid journal entry: {0}")]
    InvalidEntry(#[from] JournalValidationError),
}

impl ClientError {
    /// Whether the retry loop should spend budget on this failure.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Transport(_))
    }
}
