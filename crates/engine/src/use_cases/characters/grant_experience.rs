//! Grant experience use case.
//!
//! Adds experience from a game action and reports any level change.

use std::sync::Arc;

use emberhall_domain::CharacterId;

use crate::infrastructure::ports::{CharacterRepo, ClockPort};
use crate::use_cases::guard::{self, Actor};

use super::error::CharacterError;
use super::types::GrantExperienceResult;

/// Source recorded when the caller does not name one.
const DEFAULT_GRANT_SOURCE: &str = "game_action";

/// Grant experience use case.
pub struct GrantExperience {
    characters: Arc<dyn CharacterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl GrantExperience {
    pub fn new(characters: Arc<dyn CharacterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { characters, clock }
    }

    /// Execute the grant.
    ///
    /// # Arguments
    /// * `amount` - Experience points to add; zero is rejected
    /// * `source` - Free-form label for the activity log
    pub async fn execute(
        &self,
        actor: &Actor,
        character_id: CharacterId,
        amount: u64,
        source: Option<String>,
    ) -> Result<GrantExperienceResult, CharacterError> {
        if amount == 0 {
            return Err(CharacterError::InvalidAmount);
        }

        let mut character = self
            .characters
            .get(character_id)
            .await?
            .ok_or(CharacterError::CharacterNotFound)?;

        if !guard::can_act_on(actor, &character) {
            return Err(CharacterError::Forbidden);
        }

        let grant = character.add_experience(amount);
        character.touch(self.clock.now());
        self.characters.save(&character).await?;

        let source = source.unwrap_or_else(|| DEFAULT_GRANT_SOURCE.to_string());
        tracing::info!(
            character_id = %character.id(),
            amount,
            leveled_up = grant.leveled_up,
            new_level = grant.new_level,
            %source,
            "experience granted"
        );

        Ok(GrantExperienceResult {
            character,
            leveled_up: grant.leveled_up,
            new_level: grant.new_level,
            source,
        })
    }
}
