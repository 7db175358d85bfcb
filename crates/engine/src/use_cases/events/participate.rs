//! Participate in event use case.
//!
//! Participation pays the event's rewards once per character (unless the
//! rule set allows repeats) and auto-starts the event's linked quests.
//! Linked quests the character cannot start are skipped, never an error;
//! a returning participant may already have them active or completed.

use std::sync::Arc;

use emberhall_domain::{CharacterId, EventId};

use crate::infrastructure::game_rules::GameRules;
use crate::infrastructure::ports::{CharacterRepo, ClockPort, EventRepo, QuestRepo, RandomPort};
use crate::use_cases::guard::{self, Actor};

use super::error::EventError;
use super::types::ParticipationResult;

/// Participate in event use case.
pub struct ParticipateInEvent {
    characters: Arc<dyn CharacterRepo>,
    events: Arc<dyn EventRepo>,
    quests: Arc<dyn QuestRepo>,
    rules: GameRules,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
}

impl ParticipateInEvent {
    pub fn new(
        characters: Arc<dyn CharacterRepo>,
        events: Arc<dyn EventRepo>,
        quests: Arc<dyn QuestRepo>,
        rules: GameRules,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            characters,
            events,
            quests,
            rules,
            clock,
            random,
        }
    }

    /// Execute the participation.
    pub async fn execute(
        &self,
        actor: &Actor,
        character_id: CharacterId,
        event_id: EventId,
    ) -> Result<ParticipationResult, EventError> {
        let mut character = self
            .characters
            .get(character_id)
            .await?
            .ok_or(EventError::CharacterNotFound)?;

        if !guard::can_act_on(actor, &character) {
            return Err(EventError::Forbidden);
        }

        let event = self
            .events
            .get(event_id)
            .await?
            .ok_or(EventError::EventNotFound)?;

        let now = self.clock.now();
        if !event.is_running(now) {
            return Err(EventError::NotRunning);
        }

        character
            .meets_event_requirements(&event)
            .map_err(|reason| EventError::NotEligible { reason })?;

        if !self.rules.allows_repeat_participation() && character.has_participated(event_id) {
            return Err(EventError::AlreadyParticipated);
        }

        let mut roll = || self.random.draw();
        let rewards = character.apply_rewards(&event.rewards, now, &mut roll);

        let mut quests_started = Vec::new();
        for quest_id in &event.linked_quests {
            let Some(quest) = self.quests.get(*quest_id).await? else {
                continue;
            };
            if character.start_quest(&quest, now).is_ok() {
                quests_started.push(quest.id);
            }
        }

        character.record_event_participation(event_id);
        character.touch(now);
        self.characters.save(&character).await?;

        tracing::info!(
            character_id = %character.id(),
            event_id = %event_id,
            experience = rewards.experience,
            quests_started = quests_started.len(),
            "event participation recorded"
        );

        Ok(ParticipationResult {
            character,
            rewards,
            quests_started,
        })
    }
}
