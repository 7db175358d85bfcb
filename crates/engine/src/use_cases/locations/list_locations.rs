//! List locations use case.
//!
//! Returns the active catalog annotated with the character's standing, so
//! clients can render locked entries without a second round trip.

use std::sync::Arc;

use emberhall_domain::CharacterId;

use crate::infrastructure::ports::{CharacterRepo, LocationRepo};
use crate::use_cases::guard::{self, Actor};

use super::error::LocationError;
use super::types::LocationView;

/// List locations use case.
pub struct ListLocations {
    characters: Arc<dyn CharacterRepo>,
    locations: Arc<dyn LocationRepo>,
}

impl ListLocations {
    pub fn new(characters: Arc<dyn CharacterRepo>, locations: Arc<dyn LocationRepo>) -> Self {
        Self {
            characters,
            locations,
        }
    }

    /// Execute the listing. Inactive locations are omitted entirely.
    pub async fn execute(
        &self,
        actor: &Actor,
        character_id: CharacterId,
    ) -> Result<Vec<LocationView>, LocationError> {
        let character = self
            .characters
            .get(character_id)
            .await?
            .ok_or(LocationError::CharacterNotFound)?;

        if !guard::can_act_on(actor, &character) {
            return Err(LocationError::Forbidden);
        }

        let views = self
            .locations
            .list()
            .await?
            .into_iter()
            .filter(|location| location.is_active)
            .map(|location| {
                let accessible = character.can_access(&location);
                let visited = character.has_unlocked(location.id);
                LocationView {
                    location,
                    accessible,
                    visited,
                }
            })
            .collect();

        Ok(views)
    }
}
