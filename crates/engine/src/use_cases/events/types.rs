//! Result types for event use cases.

use emberhall_domain::{Character, GrantedRewards, QuestId};

/// Outcome of joining an event.
#[derive(Debug, Clone)]
pub struct ParticipationResult {
    pub character: Character,
    pub rewards: GrantedRewards,
    /// Linked quests actually started; ineligible ones are skipped.
    pub quests_started: Vec<QuestId>,
}
