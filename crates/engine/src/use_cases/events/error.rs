//! Event operation errors.

use crate::infrastructure::ports::RepoError;

/// Errors that can occur during event operations.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("character not found")]
    CharacterNotFound,
    #[error("event not found")]
    EventNotFound,
    #[error("not allowed to act on this character")]
    Forbidden,
    #[error("event is not running")]
    NotRunning,
    #[error("requirements not met: {reason}")]
    NotEligible { reason: String },
    #[error("already participated in this event")]
    AlreadyParticipated,
    #[error("repository error: {0}")]
    Repo(#[from] RepoError),
}
