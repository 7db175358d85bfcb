//! Item entity - catalog definitions for everything a character can hold
//!
//! Items are reference data authored by operators. Per-character state
//! (quantities, equipment) lives on the
//! [`Character`](crate::aggregates::Character) aggregate and refers to items
//! by id only, so catalog edits never rewrite player documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::ItemId;
use crate::value_objects::{ItemName, SkillKind};

/// A catalog item definition
///
/// This is a data-carrying struct with no invariants to protect. All fields
/// are public because any combination of values is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
    #[serde(default)]
    pub description: String,
    pub item_type: ItemType,
    #[serde(default)]
    pub rarity: Rarity,
    /// What using the item does to the holder.
    #[serde(default)]
    pub effects: ItemEffects,
    /// Single-use marker shown by store surfaces. Using an item decrements
    /// the stack regardless.
    #[serde(default)]
    pub consumable: bool,
    /// Reference price when sold through a store surface.
    #[serde(default)]
    pub value: ItemValue,
    /// Limited-run marker for store surfaces.
    #[serde(default)]
    pub is_limited: bool,
    /// Offer cutoff for limited runs; `None` means no cutoff.
    #[serde(default)]
    pub available_until: Option<DateTime<Utc>>,
}

impl Item {
    pub fn new(name: ItemName, item_type: ItemType) -> Self {
        Self {
            id: ItemId::new(),
            name,
            description: String::new(),
            item_type,
            rarity: Rarity::default(),
            effects: ItemEffects::default(),
            consumable: matches!(item_type, ItemType::Consumable),
            value: ItemValue::default(),
            is_limited: false,
            available_until: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn with_effects(mut self, effects: ItemEffects) -> Self {
        self.effects = effects;
        self
    }

    pub fn with_value(mut self, value: ItemValue) -> Self {
        self.value = value;
        self
    }

    pub fn limited_until(mut self, cutoff: DateTime<Utc>) -> Self {
        self.is_limited = true;
        self.available_until = Some(cutoff);
        self
    }

    /// Whether a store surface should still offer the item at `now`.
    pub fn is_offered(&self, now: DateTime<Utc>) -> bool {
        match self.available_until {
            Some(cutoff) => now < cutoff,
            None => true,
        }
    }

    /// The loadout slot this item occupies when equipped, or `None` for
    /// item types that cannot be equipped.
    pub fn equip_slot(&self) -> Option<EquipSlot> {
        match self.item_type {
            ItemType::Cigar => Some(EquipSlot::Cigar),
            ItemType::HookahFlavor => Some(EquipSlot::Hookah),
            ItemType::Accessory => Some(EquipSlot::Accessory),
            ItemType::Collectible | ItemType::Consumable | ItemType::Unknown => None,
        }
    }
}

/// Category of a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Cigar,
    HookahFlavor,
    Accessory,
    Collectible,
    Consumable,
    /// Unknown type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cigar => write!(f, "cigar"),
            Self::HookahFlavor => write!(f, "hookah_flavor"),
            Self::Accessory => write!(f, "accessory"),
            Self::Collectible => write!(f, "collectible"),
            Self::Consumable => write!(f, "consumable"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for ItemType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cigar" => Ok(Self::Cigar),
            "hookah_flavor" => Ok(Self::HookahFlavor),
            "accessory" => Ok(Self::Accessory),
            "collectible" => Ok(Self::Collectible),
            "consumable" => Ok(Self::Consumable),
            _ => Ok(Self::Unknown),
        }
    }
}

/// How hard an item is to come by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    /// Unknown rarity for forward compatibility
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Common => write!(f, "common"),
            Self::Uncommon => write!(f, "uncommon"),
            Self::Rare => write!(f, "rare"),
            Self::Epic => write!(f, "epic"),
            Self::Legendary => write!(f, "legendary"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for Rarity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "common" => Ok(Self::Common),
            "uncommon" => Ok(Self::Uncommon),
            "rare" => Ok(Self::Rare),
            "epic" => Ok(Self::Epic),
            "legendary" => Ok(Self::Legendary),
            _ => Ok(Self::Unknown),
        }
    }
}

/// Loadout slot an equippable item occupies
///
/// Slots are exclusive: equipping into an occupied slot replaces the
/// current occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipSlot {
    Cigar,
    Hookah,
    Accessory,
}

impl std::fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cigar => write!(f, "cigar"),
            Self::Hookah => write!(f, "hookah"),
            Self::Accessory => write!(f, "accessory"),
        }
    }
}

/// Fixed effects applied when an item is used
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemEffects {
    /// Skill rating adjustment, if any.
    pub skill_boost: Option<SkillBoost>,
    pub points_boost: u64,
    pub tokens_boost: u64,
}

impl ItemEffects {
    pub fn skill(kind: SkillKind, value: i16) -> Self {
        Self {
            skill_boost: Some(SkillBoost { skill: kind, value }),
            ..Self::default()
        }
    }
}

/// A signed adjustment to one skill track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillBoost {
    pub skill: SkillKind,
    pub value: i16,
}

/// Reference price of an item in each currency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemValue {
    pub points: u64,
    pub tokens: u64,
}
