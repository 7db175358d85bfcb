//! Abandon quest use case.
//!
//! Drops an active quest. Progress is discarded and nothing pays out.

use std::sync::Arc;

use emberhall_domain::{CharacterId, QuestId};

use crate::infrastructure::ports::{CharacterRepo, ClockPort};
use crate::use_cases::guard::{self, Actor};

use super::error::QuestError;

/// Abandon quest use case.
pub struct AbandonQuest {
    characters: Arc<dyn CharacterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl AbandonQuest {
    pub fn new(characters: Arc<dyn CharacterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { characters, clock }
    }

    pub async fn execute(
        &self,
        actor: &Actor,
        character_id: CharacterId,
        quest_id: QuestId,
    ) -> Result<(), QuestError> {
        let mut character = self
            .characters
            .get(character_id)
            .await?
            .ok_or(QuestError::CharacterNotFound)?;

        if !guard::can_act_on(actor, &character) {
            return Err(QuestError::Forbidden);
        }

        character.abandon_quest(quest_id)?;
        character.touch(self.clock.now());
        self.characters.save(&character).await?;

        tracing::info!(
            character_id = %character.id(),
            quest_id = %quest_id,
            "quest abandoned"
        );

        Ok(())
    }
}
