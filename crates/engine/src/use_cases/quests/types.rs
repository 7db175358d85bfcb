//! Result types for quest use cases.

use emberhall_domain::Quest;

/// Where one board quest stands for one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestAvailability {
    /// Can be started right now.
    Available,
    /// Currently in progress.
    Active { progress_percent: u8 },
    /// Finished and not repeatable.
    Completed,
    /// Requirements not met; the reason names the first gap.
    NotEligible { reason: String },
}

/// One quest board row: the catalog quest plus this character's standing.
#[derive(Debug, Clone)]
pub struct QuestBoardEntry {
    pub quest: Quest,
    pub availability: QuestAvailability,
}
