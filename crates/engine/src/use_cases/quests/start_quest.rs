//! Start quest use case.
//!
//! Puts a character on a quest, snapshotting the objective list as it
//! stands today.

use std::sync::Arc;

use emberhall_domain::{Character, CharacterId, QuestId};

use crate::infrastructure::ports::{CharacterRepo, ClockPort, QuestRepo};
use crate::use_cases::guard::{self, Actor};

use super::error::QuestError;

/// Start quest use case.
///
/// Orchestrates: ownership check, catalog lookup, eligibility, snapshot,
/// persistence.
pub struct StartQuest {
    characters: Arc<dyn CharacterRepo>,
    quests: Arc<dyn QuestRepo>,
    clock: Arc<dyn ClockPort>,
}

impl StartQuest {
    pub fn new(
        characters: Arc<dyn CharacterRepo>,
        quests: Arc<dyn QuestRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            characters,
            quests,
            clock,
        }
    }

    /// Execute the start. Returns the updated character; the new entry is
    /// on its active quest list.
    pub async fn execute(
        &self,
        actor: &Actor,
        character_id: CharacterId,
        quest_id: QuestId,
    ) -> Result<Character, QuestError> {
        let mut character = self
            .characters
            .get(character_id)
            .await?
            .ok_or(QuestError::CharacterNotFound)?;

        if !guard::can_act_on(actor, &character) {
            return Err(QuestError::Forbidden);
        }

        let quest = self
            .quests
            .get(quest_id)
            .await?
            .ok_or(QuestError::QuestNotFound)?;

        let now = self.clock.now();
        character.start_quest(&quest, now)?;
        character.touch(now);
        self.characters.save(&character).await?;

        tracing::info!(
            character_id = %character.id(),
            quest_id = %quest_id,
            objectives = quest.objectives.len(),
            "quest started"
        );

        Ok(character)
    }
}
