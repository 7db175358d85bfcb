//! Unequip item use case.

use std::sync::Arc;

use emberhall_domain::{Character, CharacterId, ItemId};

use crate::infrastructure::ports::{CharacterRepo, ClockPort};
use crate::use_cases::guard::{self, Actor};

use super::error::ItemError;

/// Unequip item use case. The item stays in the inventory.
pub struct UnequipItem {
    characters: Arc<dyn CharacterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl UnequipItem {
    pub fn new(characters: Arc<dyn CharacterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { characters, clock }
    }

    /// Execute the unequip. The loadout is keyed by item id, so no catalog
    /// lookup is needed.
    pub async fn execute(
        &self,
        actor: &Actor,
        character_id: CharacterId,
        item_id: ItemId,
    ) -> Result<Character, ItemError> {
        let mut character = self
            .characters
            .get(character_id)
            .await?
            .ok_or(ItemError::CharacterNotFound)?;

        if !guard::can_act_on(actor, &character) {
            return Err(ItemError::Forbidden);
        }

        character.unequip(item_id)?;
        character.touch(self.clock.now());
        self.characters.save(&character).await?;

        tracing::debug!(
            character_id = %character.id(),
            item_id = %item_id,
            "item unequipped"
        );

        Ok(character)
    }
}
