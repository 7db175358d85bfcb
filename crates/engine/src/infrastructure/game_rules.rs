//! Operator-tunable rules that change engine behavior.

use serde::{Deserialize, Serialize};

/// How repeat participation in a running event is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventParticipationPolicy {
    /// Each character may join a given event once; repeats are rejected.
    SingleEntry,
    /// Characters may join the same event again while it runs.
    AllowRepeat,

    /// Forward-compatibility fallback for newer variants.
    #[serde(other)]
    Unknown,
}

fn default_event_participation() -> EventParticipationPolicy {
    EventParticipationPolicy::SingleEntry
}

impl std::fmt::Display for EventParticipationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventParticipationPolicy::SingleEntry => write!(f, "single_entry"),
            EventParticipationPolicy::AllowRepeat => write!(f, "allow_repeat"),
            EventParticipationPolicy::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for EventParticipationPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single_entry" | "singleentry" | "single" => Ok(EventParticipationPolicy::SingleEntry),
            "allow_repeat" | "allowrepeat" | "repeat" => Ok(EventParticipationPolicy::AllowRepeat),
            _ => Err(()),
        }
    }
}

/// Rule set the engine is composed with.
///
/// Unknown policy values behave like the default, so a config written by a
/// newer build does not change semantics on an older one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    #[serde(default = "default_event_participation")]
    pub event_participation: EventParticipationPolicy,
}

impl GameRules {
    /// Whether a character who already participated may join again.
    pub fn allows_repeat_participation(&self) -> bool {
        matches!(
            self.event_participation,
            EventParticipationPolicy::AllowRepeat
        )
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            event_participation: default_event_participation(),
        }
    }
}
