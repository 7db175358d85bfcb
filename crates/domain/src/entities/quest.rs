//! Quest entity - catalog definitions for quest lines
//!
//! A quest's objective list is a shared template. When a character starts a
//! quest, the aggregate snapshots per-objective completion flags keyed by
//! objective index, so editing a quest in the catalog never mutates
//! in-flight progress.

use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, LocationId, QuestId};
use crate::value_objects::{QuestRequirements, RewardTemplate};

/// A catalog quest definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub quest_type: QuestType,
    #[serde(default)]
    pub difficulty: QuestDifficulty,
    #[serde(default)]
    pub requirements: QuestRequirements,
    pub objectives: Vec<Objective>,
    #[serde(default)]
    pub rewards: RewardTemplate,
    /// Whether a character may start this quest again after completing it.
    #[serde(default)]
    pub repeatable: bool,
    /// Inactive quests cannot be started and do not appear on the board.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Quest {
    /// Daily quests are repeatable by default; everything else is one-shot
    /// unless overridden.
    pub fn new(title: impl Into<String>, quest_type: QuestType) -> Self {
        Self {
            id: QuestId::new(),
            title: title.into(),
            description: String::new(),
            quest_type,
            difficulty: QuestDifficulty::default(),
            requirements: QuestRequirements::default(),
            objectives: Vec::new(),
            rewards: RewardTemplate::default(),
            repeatable: matches!(quest_type, QuestType::Daily),
            is_active: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_requirements(mut self, requirements: QuestRequirements) -> Self {
        self.requirements = requirements;
        self
    }

    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objectives.push(objective);
        self
    }

    pub fn with_rewards(mut self, rewards: RewardTemplate) -> Self {
        self.rewards = rewards;
        self
    }

    pub fn with_repeatable(mut self, repeatable: bool) -> Self {
        self.repeatable = repeatable;
        self
    }
}

/// Category of a quest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestType {
    Main,
    Side,
    Daily,
    Event,
    /// Unknown type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for QuestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Main => write!(f, "main"),
            Self::Side => write!(f, "side"),
            Self::Daily => write!(f, "daily"),
            Self::Event => write!(f, "event"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for QuestType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Self::Main),
            "side" => Ok(Self::Side),
            "daily" => Ok(Self::Daily),
            "event" => Ok(Self::Event),
            _ => Ok(Self::Unknown),
        }
    }
}

/// Authored difficulty band, shown on the quest board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestDifficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    /// Unknown difficulty for forward compatibility
    #[serde(other)]
    Unknown,
}

/// One step of a quest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    pub description: String,
    pub kind: ObjectiveKind,
    /// What the objective points at, when the kind targets something.
    #[serde(default)]
    pub target: Option<ObjectiveTarget>,
    /// How many of the target the step needs (collect/use kinds).
    #[serde(default = "default_amount")]
    pub required_amount: u32,
}

fn default_amount() -> u32 {
    1
}

impl Objective {
    pub fn new(description: impl Into<String>, kind: ObjectiveKind) -> Self {
        Self {
            description: description.into(),
            kind,
            target: None,
            required_amount: 1,
        }
    }

    /// An objective completed by visiting one location.
    pub fn visit(description: impl Into<String>, location_id: LocationId) -> Self {
        Self {
            description: description.into(),
            kind: ObjectiveKind::VisitLocation,
            target: Some(ObjectiveTarget::Location(location_id)),
            required_amount: 1,
        }
    }

    /// An objective completed by collecting an item.
    pub fn collect(description: impl Into<String>, item_id: ItemId, amount: u32) -> Self {
        Self {
            description: description.into(),
            kind: ObjectiveKind::CollectItem,
            target: Some(ObjectiveTarget::Item(item_id)),
            required_amount: amount,
        }
    }

    /// Whether visiting `location_id` satisfies this objective.
    pub fn is_satisfied_by_visit(&self, location_id: LocationId) -> bool {
        self.kind == ObjectiveKind::VisitLocation
            && self.target == Some(ObjectiveTarget::Location(location_id))
    }
}

/// What completes an objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveKind {
    VisitLocation,
    CollectItem,
    UseItem,
    TalkToNpc,
    AchieveSkill,
    Custom,
    /// Unknown kind for forward compatibility
    #[serde(other)]
    Unknown,
}

/// Reference an objective points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum ObjectiveTarget {
    Location(LocationId),
    Item(ItemId),
}
