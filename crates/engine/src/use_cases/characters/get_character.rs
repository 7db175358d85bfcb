//! Get character use case.

use std::sync::Arc;

use emberhall_domain::{Character, CharacterId};

use crate::infrastructure::ports::CharacterRepo;
use crate::use_cases::guard::{self, Actor};

use super::error::CharacterError;

/// Get character use case.
pub struct GetCharacter {
    characters: Arc<dyn CharacterRepo>,
}

impl GetCharacter {
    pub fn new(characters: Arc<dyn CharacterRepo>) -> Self {
        Self { characters }
    }

    /// Load one character, enforcing ownership.
    pub async fn execute(
        &self,
        actor: &Actor,
        character_id: CharacterId,
    ) -> Result<Character, CharacterError> {
        let character = self
            .characters
            .get(character_id)
            .await?
            .ok_or(CharacterError::CharacterNotFound)?;

        if !guard::can_act_on(actor, &character) {
            return Err(CharacterError::Forbidden);
        }

        Ok(character)
    }
}
