//! Domain entities - Core business objects with identity
//!
//! Everything here is shared catalog data. Per-character state references
//! these entities by id and lives on the aggregates.

mod event;
mod item;
mod location;
mod quest;

pub use event::{Event, EventType};
pub use item::{EquipSlot, Item, ItemEffects, ItemType, ItemValue, Rarity, SkillBoost};
pub use location::{Coordinates, Location, LocationDrop, LocationType};
pub use quest::{Objective, ObjectiveKind, ObjectiveTarget, Quest, QuestDifficulty, QuestType};
