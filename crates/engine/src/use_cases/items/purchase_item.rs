//! Purchase item use case.
//!
//! The shop layer resolves what an item costs (listings, discounts,
//! limited-time pricing); this use case takes the resolved price, debits
//! the wallet, and merges one unit into the inventory in a single save.

use std::sync::Arc;

use emberhall_domain::{CharacterId, ItemId};

use crate::infrastructure::ports::{CharacterRepo, ClockPort, ItemRepo};
use crate::use_cases::guard::{self, Actor};

use super::error::ItemError;
use super::types::PurchaseResult;

/// Purchase item use case.
pub struct PurchaseItem {
    characters: Arc<dyn CharacterRepo>,
    items: Arc<dyn ItemRepo>,
    clock: Arc<dyn ClockPort>,
}

impl PurchaseItem {
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

    /// Execute the purchase. The deduction and the grant land in one save.
    pub async fn execute(
        &self,
        actor: &Actor,
        character_id: CharacterId,
        item_id: ItemId,
        price: u64,
    ) -> Result<PurchaseResult, ItemError> {
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

        character.spend_points(price)?;
        let now = self.clock.now();
        character.grant_item(item.id, 1, now);
        character.touch(now);
        self.characters.save(&character).await?;

        tracing::info!(
            character_id = %character.id(),
            item_id = %item.id,
            spent_points = price,
            "item purchased"
        );

        Ok(PurchaseResult {
            character,
            item_name: item.name.as_str().to_string(),
            spent_points: price,
        })
    }
}
