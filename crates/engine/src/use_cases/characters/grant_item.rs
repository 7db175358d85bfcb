//! Grant item use case.
//!
//! Hands catalog items to a character outside the store flow (admin grants,
//! promotional rewards).

use std::sync::Arc;

use emberhall_domain::{CharacterId, ItemId};

use crate::infrastructure::ports::{CharacterRepo, ClockPort, ItemRepo};
use crate::use_cases::guard::{self, Actor};

use super::error::CharacterError;
use super::types::GrantItemResult;

/// Grant item use case.
///
/// Orchestrates: catalog validation, inventory merge, persistence.
pub struct GrantItem {
    characters: Arc<dyn CharacterRepo>,
    items: Arc<dyn ItemRepo>,
    clock: Arc<dyn ClockPort>,
}

impl GrantItem {
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

    pub async fn execute(
        &self,
        actor: &Actor,
        character_id: CharacterId,
        item_id: ItemId,
        quantity: u32,
    ) -> Result<GrantItemResult, CharacterError> {
        if quantity == 0 {
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

        let item = self
            .items
            .get(item_id)
            .await?
            .ok_or(CharacterError::ItemNotFound)?;

        let now = self.clock.now();
        character.grant_item(item_id, quantity, now);
        character.touch(now);
        self.characters.save(&character).await?;

        let total_held = character.item_quantity(item_id);
        tracing::info!(
            character_id = %character.id(),
            item_id = %item_id,
            quantity,
            total_held,
            "item granted"
        );

        Ok(GrantItemResult {
            character,
            item_name: item.name.as_str().to_string(),
            quantity,
            total_held,
        })
    }
}
