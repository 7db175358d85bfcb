//! Reward templates and resolved reward records
//!
//! Quests and events describe what they pay out with a [`RewardTemplate`].
//! Resolving a template against a character produces a [`GrantedRewards`]
//! record of what was actually handed over, including the outcome of any
//! chance-based item rolls.

use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, LocationId};

/// A quantity of one catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStack {
    pub item_id: ItemId,
    pub quantity: u32,
}

impl ItemStack {
    pub fn new(item_id: ItemId, quantity: u32) -> Self {
        Self { item_id, quantity }
    }
}

/// One item line in a reward template.
///
/// `chance_percent` is the probability the line pays out at all; the roll is
/// made once per line, not per unit of quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardItem {
    pub item_id: ItemId,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default = "default_chance")]
    pub chance_percent: u8,
}

impl RewardItem {
    /// A guaranteed drop of `quantity` units.
    pub fn guaranteed(item_id: ItemId, quantity: u32) -> Self {
        Self {
            item_id,
            quantity,
            chance_percent: 100,
        }
    }

    /// A single-unit drop granted with the given percent chance.
    pub fn with_chance(item_id: ItemId, chance_percent: u8) -> Self {
        Self {
            item_id,
            quantity: 1,
            chance_percent,
        }
    }
}

fn default_quantity() -> u32 {
    1
}

fn default_chance() -> u8 {
    100
}

/// Everything a quest or event can pay out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RewardTemplate {
    pub experience: u64,
    pub points: u64,
    pub tokens: u64,
    pub items: Vec<RewardItem>,
    pub unlocked_locations: Vec<LocationId>,
}

impl RewardTemplate {
    /// Currency-only template, no items or unlocks.
    pub fn currency(experience: u64, points: u64, tokens: u64) -> Self {
        Self {
            experience,
            points,
            tokens,
            ..Self::default()
        }
    }

    /// Whether resolving this template can change a character at all.
    pub fn is_empty(&self) -> bool {
        self.experience == 0
            && self.points == 0
            && self.tokens == 0
            && self.items.is_empty()
            && self.unlocked_locations.is_empty()
    }
}

/// Record of what a reward resolution actually granted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantedRewards {
    pub experience: u64,
    pub points: u64,
    pub tokens: u64,
    /// Items that survived their chance rolls, with quantities.
    pub items: Vec<ItemStack>,
    /// Locations newly unlocked by this grant (already-unlocked ones are
    /// not repeated here).
    pub unlocked_locations: Vec<LocationId>,
    /// Whether the experience component pushed the character past a level
    /// threshold.
    pub leveled_up: bool,
    pub new_level: u32,
}
