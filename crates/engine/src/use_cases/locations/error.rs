//! Location operation errors.

use crate::infrastructure::ports::RepoError;

/// Errors that can occur during location operations.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("character not found")]
    CharacterNotFound,
    #[error("location not found")]
    LocationNotFound,
    #[error("not allowed to act on this character")]
    Forbidden,
    #[error("location is locked")]
    Locked,
    #[error("repository error: {0}")]
    Repo(#[from] RepoError),
}
