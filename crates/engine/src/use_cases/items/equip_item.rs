//! Equip item use case.
//!
//! Slots are exclusive; equipping into an occupied slot displaces the
//! current occupant, which stays in the inventory.

use std::sync::Arc;

use emberhall_domain::{CharacterId, ItemId};

use crate::infrastructure::ports::{CharacterRepo, ClockPort, ItemRepo};
use crate::use_cases::guard::{self, Actor};

use super::error::ItemError;
use super::types::EquipResult;

/// Equip item use case.
pub struct EquipItem {
    characters: Arc<dyn CharacterRepo>,
    items: Arc<dyn ItemRepo>,
    clock: Arc<dyn ClockPort>,
}

impl EquipItem {
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

    /// Execute the equip.
    pub async fn execute(
        &self,
        actor: &Actor,
        character_id: CharacterId,
        item_id: ItemId,
    ) -> Result<EquipResult, ItemError> {
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

        let slot = item.equip_slot().ok_or(ItemError::NotEquippable)?;
        let replaced = character.equip(&item)?;
        character.touch(self.clock.now());
        self.characters.save(&character).await?;

        tracing::debug!(
            character_id = %character.id(),
            item_id = %item.id,
            slot = %slot,
            "item equipped"
        );

        Ok(EquipResult {
            character,
            slot,
            replaced,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockCharacterRepo, MockClockPort, MockItemRepo};
    use chrono::Utc;
    use emberhall_domain::{
        Character, CharacterName, EquipSlot, Item, ItemName, ItemType, UserId,
    };

    fn fixed_clock() -> MockClockPort {
        let mut clock = MockClockPort::new();
        clock.expect_now().returning(Utc::now);
        clock
    }

    fn use_case(characters: MockCharacterRepo, items: MockItemRepo) -> EquipItem {
        EquipItem::new(
            Arc::new(characters),
            Arc::new(items),
            Arc::new(fixed_clock()),
        )
    }

    #[tokio::test]
    async fn when_item_type_has_no_slot_returns_not_equippable() {
        let owner = UserId::new();
        let mut character =
            Character::new(owner, CharacterName::new("Silas").unwrap(), Utc::now());
        let item = Item::new(
            ItemName::new("Vintage Matchbook").unwrap(),
            ItemType::Collectible,
        );
        let item_id = item.id;
        character.grant_item(item_id, 1, Utc::now());
        let character_clone = character.clone();

        let mut characters = MockCharacterRepo::new();
        characters
            .expect_get()
            .returning(move |_| Ok(Some(character_clone.clone())));
        let mut items = MockItemRepo::new();
        items.expect_get().returning(move |_| Ok(Some(item.clone())));

        let result = use_case(characters, items)
            .execute(&Actor::player(owner), character.id(), item_id)
            .await;

        assert!(matches!(result, Err(ItemError::NotEquippable)));
    }

    #[tokio::test]
    async fn when_item_not_held_returns_not_held() {
        let owner = UserId::new();
        let character = Character::new(owner, CharacterName::new("Silas").unwrap(), Utc::now());
        let character_clone = character.clone();
        let item = Item::new(ItemName::new("Maduro Reserve").unwrap(), ItemType::Cigar);
        let item_id = item.id;

        let mut characters = MockCharacterRepo::new();
        characters
            .expect_get()
            .returning(move |_| Ok(Some(character_clone.clone())));
        let mut items = MockItemRepo::new();
        items.expect_get().returning(move |_| Ok(Some(item.clone())));

        let result = use_case(characters, items)
            .execute(&Actor::player(owner), character.id(), item_id)
            .await;

        assert!(matches!(result, Err(ItemError::NotHeld)));
    }

    #[tokio::test]
    async fn when_slot_is_occupied_the_previous_item_is_displaced() {
        let owner = UserId::new();
        let first = Item::new(ItemName::new("Maduro Reserve").unwrap(), ItemType::Cigar);
        let second = Item::new(ItemName::new("Connecticut Shade").unwrap(), ItemType::Cigar);
        let first_id = first.id;
        let second_id = second.id;

        let mut character =
            Character::new(owner, CharacterName::new("Silas").unwrap(), Utc::now());
        character.grant_item(first_id, 1, Utc::now());
        character.grant_item(second_id, 1, Utc::now());
        character.equip(&first).unwrap();
        let character_clone = character.clone();

        let mut characters = MockCharacterRepo::new();
        characters
            .expect_get()
            .returning(move |_| Ok(Some(character_clone.clone())));
        characters
            .expect_save()
            .withf(move |c| {
                c.loadout().in_slot(EquipSlot::Cigar) == Some(second_id)
                    && c.has_item(first_id, 1)
            })
            .returning(|_| Ok(()));
        let mut items = MockItemRepo::new();
        items
            .expect_get()
            .returning(move |_| Ok(Some(second.clone())));

        let result = use_case(characters, items)
            .execute(&Actor::player(owner), character.id(), second_id)
            .await
            .unwrap();

        assert_eq!(result.slot, EquipSlot::Cigar);
        assert_eq!(result.replaced, Some(first_id));
    }
}
