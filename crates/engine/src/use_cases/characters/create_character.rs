//! Create character use case.
//!
//! Registers the caller's character. One character per user account.

use std::sync::Arc;

use emberhall_domain::{Character, CharacterName};

use crate::infrastructure::ports::{CharacterRepo, ClockPort};
use crate::use_cases::guard::Actor;

use super::error::CharacterError;
use super::types::CreateCharacterInput;

/// Create character use case.
///
/// Orchestrates: name validation, duplicate check, persistence.
pub struct CreateCharacter {
    characters: Arc<dyn CharacterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl CreateCharacter {
    pub fn new(characters: Arc<dyn CharacterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { characters, clock }
    }

    /// Execute the create character use case.
    ///
    /// The character is owned by the actor's user account.
    ///
    /// # Returns
    /// * `Ok(Character)` - The freshly created character
    /// * `Err(CharacterError)` - Validation failure or duplicate
    pub async fn execute(
        &self,
        actor: &Actor,
        input: CreateCharacterInput,
    ) -> Result<Character, CharacterError> {
        let name = CharacterName::new(input.name)?;

        if self.characters.get_by_user(actor.user_id).await?.is_some() {
            return Err(CharacterError::AlreadyExists);
        }

        let mut character = Character::new(actor.user_id, name, self.clock.now());
        if let Some(avatar) = input.avatar {
            character.set_avatar(avatar);
        }

        self.characters.save(&character).await?;

        tracing::info!(
            character_id = %character.id(),
            user_id = %actor.user_id,
            name = %character.name(),
            "character created"
        );

        Ok(character)
    }
}
