//! Quest operation errors.

use crate::infrastructure::ports::RepoError;
use emberhall_domain::{QuestProgressError, QuestStartError};

/// Errors that can occur during quest operations.
#[derive(Debug, thiserror::Error)]
pub enum QuestError {
    #[error("character not found")]
    CharacterNotFound,
    #[error("quest not found")]
    QuestNotFound,
    #[error("not allowed to act on this character")]
    Forbidden,
    #[error("quest is already active")]
    AlreadyActive,
    #[error("quest is already completed")]
    AlreadyCompleted,
    #[error("quest is not active for this character")]
    NotActive,
    #[error("objective index {index} out of range ({objective_count} objectives)")]
    ObjectiveOutOfRange {
        index: usize,
        objective_count: usize,
    },
    #[error("requirements not met: {reason}")]
    NotEligible { reason: String },
    #[error("repository error: {0}")]
    Repo(#[from] RepoError),
}

impl From<QuestStartError> for QuestError {
    fn from(err: QuestStartError) -> Self {
        match err {
            QuestStartError::AlreadyActive => Self::AlreadyActive,
            QuestStartError::AlreadyCompleted => Self::AlreadyCompleted,
            QuestStartError::NotEligible(reason) => Self::NotEligible { reason },
        }
    }
}

impl From<QuestProgressError> for QuestError {
    fn from(err: QuestProgressError) -> Self {
        match err {
            QuestProgressError::QuestNotActive => Self::NotActive,
            QuestProgressError::InvalidObjective {
                index,
                objective_count,
            } => Self::ObjectiveOutOfRange {
                index,
                objective_count,
            },
        }
    }
}
