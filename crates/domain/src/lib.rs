pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod progression;
pub mod value_objects;

// Re-export aggregates and their transition types
pub use aggregates::{
    ActiveQuest, Character, CompletedQuest, ExperienceGrant, InventoryEntry, InventoryError,
    Loadout, ObjectiveReport, QuestCompletion, QuestProgressError, QuestStartError, VisitOutcome,
    DEFAULT_AVATAR,
};

// Re-export catalog entities
pub use entities::{
    Coordinates, EquipSlot, Event, EventType, Item, ItemEffects, ItemType, ItemValue, Location,
    LocationDrop, LocationType, Objective, ObjectiveKind, ObjectiveTarget, Quest, QuestDifficulty,
    QuestType, Rarity, SkillBoost,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{CharacterId, EventId, ItemId, LocationId, QuestId, UserId};

pub use progression::{level_for_experience, EXPERIENCE_PER_LEVEL};

// Re-export value objects
pub use value_objects::{
    CharacterName, EventRequirements, GrantedRewards, ItemName, ItemStack, LocationName,
    QuestRequirements, RewardItem, RewardTemplate, SkillKind, SkillRequirements, SkillSet,
    UnlockRequirements, SKILL_MAX, SKILL_MIN,
};
