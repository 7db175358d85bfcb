//! Entry requirements for quests, locations, and events
//!
//! These are pure data; the eligibility checks live on the
//! [`Character`](crate::Character) aggregate, which owns the state the
//! checks read.

use serde::{Deserialize, Serialize};

use crate::ids::QuestId;
use crate::value_objects::rewards::ItemStack;
use crate::value_objects::skills::SkillRequirements;

fn default_level() -> u32 {
    1
}

/// What a character must have before starting a quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestRequirements {
    /// Minimum character level.
    pub level: u32,
    /// Minimum skill ratings.
    pub skills: SkillRequirements,
    /// Items that must be held (checked, not consumed).
    pub items: Vec<ItemStack>,
    /// Quests that must already be completed.
    pub previous_quests: Vec<QuestId>,
}

impl Default for QuestRequirements {
    fn default() -> Self {
        Self {
            level: default_level(),
            skills: SkillRequirements::default(),
            items: Vec::new(),
            previous_quests: Vec::new(),
        }
    }
}

impl QuestRequirements {
    pub fn min_level(level: u32) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }
}

/// What opens a locked location.
///
/// Every clause must hold at once; see
/// [`Character::can_access`](crate::Character::can_access).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnlockRequirements {
    /// Minimum character level.
    pub level: u32,
    /// Quests that must all be completed.
    pub quests: Vec<QuestId>,
    /// Items that must all be held (checked, not consumed).
    pub items: Vec<ItemStack>,
}

impl Default for UnlockRequirements {
    fn default() -> Self {
        Self {
            level: default_level(),
            quests: Vec::new(),
            items: Vec::new(),
        }
    }
}

impl UnlockRequirements {
    pub fn min_level(level: u32) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }
}

/// What a character must have to participate in an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventRequirements {
    pub level: u32,
    pub skills: SkillRequirements,
}

impl Default for EventRequirements {
    fn default() -> Self {
        Self {
            level: default_level(),
            skills: SkillRequirements::default(),
        }
    }
}
