//! Item operation errors.

use crate::infrastructure::ports::RepoError;
use emberhall_domain::InventoryError;

/// Errors that can occur during item operations.
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("character not found")]
    CharacterNotFound,
    #[error("item not found")]
    ItemNotFound,
    #[error("not allowed to act on this character")]
    Forbidden,
    #[error("insufficient points: have {available}, need {required}")]
    InsufficientFunds { available: u64, required: u64 },
    #[error("item is not held")]
    NotHeld,
    #[error("item cannot be equipped")]
    NotEquippable,
    #[error("item is not equipped")]
    NotEquipped,
    #[error("repository error: {0}")]
    Repo(#[from] RepoError),
}

impl From<InventoryError> for ItemError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::ItemNotHeld(_) => Self::NotHeld,
            InventoryError::InsufficientFunds {
                available,
                required,
            } => Self::InsufficientFunds {
                available,
                required,
            },
            InventoryError::NotEquippable(_) => Self::NotEquippable,
            InventoryError::NotEquipped(_) => Self::NotEquipped,
        }
    }
}
