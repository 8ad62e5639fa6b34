use thiserror::Error;

use crate::models::{GoalError, JournalValidationError};
use crate::session::SessionError;

// Type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the journal core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Session storage failed: {0}")]
    Session(#[from] SessionError),

    #[error("Goal operation failed: {0}")]
    Goal(#[from] GoalError),

    #[error("Journal validation failed: {0}")]
    Journal(#[from] JournalValidationError),
}
