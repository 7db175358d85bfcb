//! Quest board use case.
//!
//! Lists the active quest catalog annotated with where each quest stands
//! for one character.

use std::sync::Arc;

use emberhall_domain::{Character, CharacterId, Quest};

use crate::infrastructure::ports::{CharacterRepo, QuestRepo};
use crate::use_cases::guard::{self, Actor};

use super::error::QuestError;
use super::types::{QuestAvailability, QuestBoardEntry};

/// Quest board use case.
pub struct ListAvailableQuests {
    characters: Arc<dyn CharacterRepo>,
    quests: Arc<dyn QuestRepo>,
}

impl ListAvailableQuests {
    pub fn new(characters: Arc<dyn CharacterRepo>, quests: Arc<dyn QuestRepo>) -> Self {
        Self { characters, quests }
    }

    pub async fn execute(
        &self,
        actor: &Actor,
        character_id: CharacterId,
    ) -> Result<Vec<QuestBoardEntry>, QuestError> {
        let character = self
            .characters
            .get(character_id)
            .await?
            .ok_or(QuestError::CharacterNotFound)?;

        if !guard::can_act_on(actor, &character) {
            return Err(QuestError::Forbidden);
        }

        let board = self
            .quests
            .list_active()
            .await?
            .into_iter()
            .map(|quest| {
                let availability = availability_for(&character, &quest);
                QuestBoardEntry {
                    quest,
                    availability,
                }
            })
            .collect();

        Ok(board)
    }
}

fn availability_for(character: &Character, quest: &Quest) -> QuestAvailability {
    if let Some(entry) = character.active_quest(quest.id) {
        return QuestAvailability::Active {
            progress_percent: entry.progress_percent(),
        };
    }
    if !quest.repeatable && character.has_completed_quest(quest.id) {
        return QuestAvailability::Completed;
    }
    match character.check_quest_start(quest) {
        Ok(()) => QuestAvailability::Available,
        Err(err) => QuestAvailability::NotEligible {
            reason: err.to_string(),
        },
    }
}
