//! Character operation errors.

use crate::infrastructure::ports::RepoError;
use emberhall_domain::DomainError;

/// Errors that can occur during character operations.
#[derive(Debug, thiserror::Error)]
pub enum CharacterError {
    #[error("character not found")]
    CharacterNotFound,
    #[error("item not found")]
    ItemNotFound,
    #[error("user already has a character")]
    AlreadyExists,
    #[error("amount must be greater than zero")]
    InvalidAmount,
    #[error("not allowed to act on this character")]
    Forbidden,
    #[error("validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("repository error: {0}")]
    Repo(#[from] RepoError),
}
