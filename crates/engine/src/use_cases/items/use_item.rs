//! Use item use case.
//!
//! Consumes one unit from the stack and applies the item's fixed effects.
//! Using the last unit also clears the item from the loadout.

use std::sync::Arc;

use emberhall_domain::{CharacterId, ItemId};

use crate::infrastructure::ports::{CharacterRepo, ClockPort, ItemRepo};
use crate::use_cases::guard::{self, Actor};

use super::error::ItemError;
use super::types::UseItemResult;

/// Use item use case.
pub struct UseItem {
    characters: Arc<dyn CharacterRepo>,
    items: Arc<dyn ItemRepo>,
    clock: Arc<dyn ClockPort>,
}

impl UseItem {
    pub fn new(
        characters: Arc<dyn CharacterRepo>,
        items: Arc<dyn ItemRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            characters,
            items,
            clock,
        }
    }

    /// Execute the use.
    pub async fn execute(
        &self,
        actor: &Actor,
        character_id: CharacterId,
        item_id: ItemId,
    ) -> Result<UseItemResult, ItemError> {
        let mut character = self
            .characters
            .get(character_id)
            .await?
            .ok_or(ItemError::CharacterNotFound)?;

        if !guard::can_act_on(actor, &character) {
            return Err(ItemError::Forbidden);
        }

        let item = self
            .items
            .get(item_id)
            .await?
            .ok_or(ItemError::ItemNotFound)?;

        let remaining = character.use_item(&item)?;
        character.touch(self.clock.now());
        self.characters.save(&character).await?;

        tracing::debug!(
            character_id = %character.id(),
            item_id = %item.id,
            remaining,
            "item used"
        );

        Ok(UseItemResult {
            character,
            item_name: item.name.as_str().to_string(),
            remaining,
        })
    }
}
