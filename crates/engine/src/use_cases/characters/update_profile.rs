//! Update profile use case.
//!
//! Renames a character or swaps its avatar. Progression state is untouched.

use std::sync::Arc;

use emberhall_domain::{Character, CharacterId, CharacterName};

use crate::infrastructure::ports::{CharacterRepo, ClockPort};
use crate::use_cases::guard::{self, Actor};

use super::error::CharacterError;
use super::types::UpdateProfileInput;

/// Update profile use case.
pub struct UpdateProfile {
    characters: Arc<dyn CharacterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl UpdateProfile {
    pub fn new(characters: Arc<dyn CharacterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { characters, clock }
    }

    /// Apply the provided fields and persist the character.
    pub async fn execute(
        &self,
        actor: &Actor,
        character_id: CharacterId,
        input: UpdateProfileInput,
    ) -> Result<Character, CharacterError> {
        let mut character = self
            .characters
            .get(character_id)
            .await?
            .ok_or(CharacterError::CharacterNotFound)?;

        if !guard::can_act_on(actor, &character) {
            return Err(CharacterError::Forbidden);
        }

        if let Some(name) = input.name {
            character.rename(CharacterName::new(name)?);
        }
        if let Some(avatar) = input.avatar {
            character.set_avatar(avatar);
        }

        character.touch(self.clock.now());
        self.characters.save(&character).await?;

        Ok(character)
    }
}
