//! Location entity - places characters can visit
//!
//! Locked locations open per character, either by an explicit unlock (quest
//! reward, prior visit) or structurally through unlock requirements. The
//! per-character unlock list lives on the aggregate; this entity is shared
//! catalog data.

use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, LocationId, QuestId};
use crate::value_objects::{LocationName, UnlockRequirements};

/// A catalog location definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: LocationId,
    pub name: LocationName,
    #[serde(default)]
    pub description: String,
    pub location_type: LocationType,
    /// Position on the city map, for client rendering.
    #[serde(default)]
    pub coordinates: Coordinates,
    /// Locked locations need an unlock or satisfied requirements to enter.
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default)]
    pub unlock_requirements: UnlockRequirements,
    /// Quests that can be picked up here.
    #[serde(default)]
    pub available_quests: Vec<QuestId>,
    /// Items that may drop on each visit, rolled independently.
    #[serde(default)]
    pub available_items: Vec<LocationDrop>,
    /// Inactive locations are hidden and cannot be visited.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Location {
    pub fn new(name: LocationName, location_type: LocationType) -> Self {
        Self {
            id: LocationId::new(),
            name,
            description: String::new(),
            location_type,
            coordinates: Coordinates::default(),
            is_locked: false,
            unlock_requirements: UnlockRequirements::default(),
            available_quests: Vec::new(),
            available_items: Vec::new(),
            is_active: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn locked(mut self, unlock_requirements: UnlockRequirements) -> Self {
        self.is_locked = true;
        self.unlock_requirements = unlock_requirements;
        self
    }

    pub fn with_drop(mut self, item_id: ItemId, chance_percent: u8) -> Self {
        self.available_items.push(LocationDrop {
            item_id,
            chance_percent,
        });
        self
    }

    pub fn with_quest(mut self, quest_id: QuestId) -> Self {
        self.available_quests.push(quest_id);
        self
    }
}

/// Category of a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Lounge,
    Store,
    EventVenue,
    QuestArea,
    Special,
    /// Unknown type for forward compatibility
    #[serde(other)]
    Unknown,
}

/// Map position for client rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

/// One potential item drop at a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDrop {
    pub item_id: ItemId,
    /// Chance the item drops on a single visit, rolled per visit.
    #[serde(default = "default_chance")]
    pub chance_percent: u8,
}

fn default_chance() -> u8 {
    100
}
