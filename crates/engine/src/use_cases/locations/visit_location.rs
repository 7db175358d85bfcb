//! Visit location use case.
//!
//! A visit advances any open visit-this-location objectives (completing
//! quests that reach 100%), remembers the location on the character's
//! unlocked list, and rolls the location's item drops.

use std::sync::Arc;

use emberhall_domain::{CharacterId, LocationId};

use crate::infrastructure::ports::{
    CharacterRepo, ClockPort, LocationRepo, QuestRepo, RandomPort,
};
use crate::use_cases::guard::{self, Actor};

use super::error::LocationError;
use super::types::VisitLocationResult;

/// Visit location use case.
pub struct VisitLocation {
    characters: Arc<dyn CharacterRepo>,
    locations: Arc<dyn LocationRepo>,
    quests: Arc<dyn QuestRepo>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
}

impl VisitLocation {
    pub fn new(
        characters: Arc<dyn CharacterRepo>,
        locations: Arc<dyn LocationRepo>,
        quests: Arc<dyn QuestRepo>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            characters,
            locations,
            quests,
            clock,
            random,
        }
    }

    /// Execute the visit.
    ///
    /// Inactive locations are reported as missing, not as locked, so that
    /// retired catalog entries stay invisible to players.
    pub async fn execute(
        &self,
        actor: &Actor,
        character_id: CharacterId,
        location_id: LocationId,
    ) -> Result<VisitLocationResult, LocationError> {
        let mut character = self
            .characters
            .get(character_id)
            .await?
            .ok_or(LocationError::CharacterNotFound)?;

        if !guard::can_act_on(actor, &character) {
            return Err(LocationError::Forbidden);
        }

        let location = self
            .locations
            .get(location_id)
            .await?
            .ok_or(LocationError::LocationNotFound)?;
        if !location.is_active {
            return Err(LocationError::LocationNotFound);
        }

        if !character.can_access(&location) {
            return Err(LocationError::Locked);
        }

        let active_ids: Vec<_> = character
            .active_quests()
            .iter()
            .map(|entry| entry.quest_id())
            .collect();
        let catalog = self.quests.get_many(&active_ids).await?;

        let now = self.clock.now();
        let mut roll = || self.random.draw();
        let outcome = character.visit_location(&location, &catalog, now, &mut roll);

        character.touch(now);
        self.characters.save(&character).await?;

        tracing::info!(
            character_id = %character.id(),
            location_id = %location_id,
            newly_unlocked = outcome.newly_unlocked,
            items_found = outcome.items_found.len(),
            quests_completed = outcome.quests_completed.len(),
            "location visited"
        );

        Ok(VisitLocationResult { character, outcome })
    }
}
