//! Event entity - time-boxed happenings with one-off rewards
//!
//! Events carry their own schedule. Whether an event is running is always
//! evaluated lazily against a supplied clock; nothing flips stored state
//! when the window opens or closes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{EventId, QuestId};
use crate::value_objects::{EventRequirements, RewardTemplate};

/// A catalog event definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub event_type: EventType,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    /// Kill switch: an inactive event never runs, whatever its window says.
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub requirements: EventRequirements,
    #[serde(default)]
    pub rewards: RewardTemplate,
    /// Quests auto-started on participation.
    #[serde(default)]
    pub linked_quests: Vec<QuestId>,
}

fn default_true() -> bool {
    true
}

impl Event {
    pub fn new(
        name: impl Into<String>,
        event_type: EventType,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: EventId::new(),
            name: name.into(),
            description: String::new(),
            event_type,
            start_at,
            end_at,
            is_active: true,
            requirements: EventRequirements::default(),
            rewards: RewardTemplate::default(),
            linked_quests: Vec::new(),
        }
    }

    pub fn with_requirements(mut self, requirements: EventRequirements) -> Self {
        self.requirements = requirements;
        self
    }

    pub fn with_rewards(mut self, rewards: RewardTemplate) -> Self {
        self.rewards = rewards;
        self
    }

    pub fn with_linked_quest(mut self, quest_id: QuestId) -> Self {
        self.linked_quests.push(quest_id);
        self
    }

    /// Whether the event accepts participation at `now`. Both window
    /// boundaries are inclusive.
    pub fn is_running(&self, now: DateTime<Utc>) -> bool {
        self.is_active && now >= self.start_at && now <= self.end_at
    }
}

/// Category of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    SpecialOffer,
    Competition,
    Seasonal,
    Promotion,
    /// Unknown type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SpecialOffer => write!(f, "special_offer"),
            Self::Competition => write!(f, "competition"),
            Self::Seasonal => write!(f, "seasonal"),
            Self::Promotion => write!(f, "promotion"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for EventType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "special_offer" => Ok(Self::SpecialOffer),
            "competition" => Ok(Self::Competition),
            "seasonal" => Ok(Self::Seasonal),
            "promotion" => Ok(Self::Promotion),
            _ => Ok(Self::Unknown),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        let start = Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 10, 8, 0, 0, 0).unwrap();
        (start, end)
    }

    #[test]
    fn runs_inside_window() {
        let (start, end) = window();
        let event = Event::new("Harvest Tasting", EventType::Seasonal, start, end);
        let middle = Utc.with_ymd_and_hms(2025, 10, 4, 12, 0, 0).unwrap();
        assert!(event.is_running(middle));
    }

    #[test]
    fn window_boundaries_are_inclusive() {
        let (start, end) = window();
        let event = Event::new("Harvest Tasting", EventType::Seasonal, start, end);
        assert!(event.is_running(start));
        assert!(event.is_running(end));
    }

    #[test]
    fn does_not_run_outside_window() {
        let (start, end) = window();
        let event = Event::new("Harvest Tasting", EventType::Seasonal, start, end);
        let before = start - chrono::Duration::seconds(1);
        let after = end + chrono::Duration::seconds(1);
        assert!(!event.is_running(before));
        assert!(!event.is_running(after));
    }

    #[test]
    fn inactive_event_never_runs() {
        let (start, end) = window();
        let mut event = Event::new("Harvest Tasting", EventType::Seasonal, start, end);
        event.is_active = false;
        let middle = Utc.with_ymd_and_hms(2025, 10, 4, 12, 0, 0).unwrap();
        assert!(!event.is_running(middle));
    }
}
