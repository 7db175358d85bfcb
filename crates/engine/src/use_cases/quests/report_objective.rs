//! Report objective use case.
//!
//! Records one objective as done (or undone) and completes the quest when
//! the snapshot reaches 100%. Completion pays the quest's rewards, with
//! chance-based item lines rolled here.

use std::sync::Arc;

use emberhall_domain::{CharacterId, ObjectiveReport, QuestId};

use crate::infrastructure::ports::{CharacterRepo, ClockPort, QuestRepo, RandomPort};
use crate::use_cases::guard::{self, Actor};

use super::error::QuestError;

/// Report objective use case.
pub struct ReportObjective {
    characters: Arc<dyn CharacterRepo>,
    quests: Arc<dyn QuestRepo>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
}

impl ReportObjective {
    pub fn new(
        characters: Arc<dyn CharacterRepo>,
        quests: Arc<dyn QuestRepo>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            characters,
            quests,
            clock,
            random,
        }
    }

    /// Execute the report.
    ///
    /// # Arguments
    /// * `objective_index` - Index into the character's snapshot, not the
    ///   current catalog
    /// * `done` - The new completion flag for that objective
    pub async fn execute(
        &self,
        actor: &Actor,
        character_id: CharacterId,
        quest_id: QuestId,
        objective_index: usize,
        done: bool,
    ) -> Result<ObjectiveReport, QuestError> {
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
        let mut roll = || self.random.draw();
        let report = character.report_objective(&quest, objective_index, done, now, &mut roll)?;

        character.touch(now);
        self.characters.save(&character).await?;

        if report.quest_completed {
            tracing::info!(
                character_id = %character.id(),
                quest_id = %quest_id,
                "quest completed"
            );
        }

        Ok(report)
    }
}
