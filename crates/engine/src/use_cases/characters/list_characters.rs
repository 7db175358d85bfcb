//! List characters use case.

use std::sync::Arc;

use emberhall_domain::{Character, UserId};

use crate::infrastructure::ports::CharacterRepo;
use crate::use_cases::guard::Actor;

use super::error::CharacterError;

/// List characters owned by a user.
pub struct ListCharacters {
    characters: Arc<dyn CharacterRepo>,
}

impl ListCharacters {
    pub fn new(characters: Arc<dyn CharacterRepo>) -> Self {
        Self { characters }
    }

    /// Players may list their own characters; admins may list anyone's.
    pub async fn execute(
        &self,
        actor: &Actor,
        user_id: UserId,
    ) -> Result<Vec<Character>, CharacterError> {
        if !actor.is_admin() && actor.user_id != user_id {
            return Err(CharacterError::Forbidden);
        }
        Ok(self.characters.list_by_owner(user_id).await?)
    }
}
