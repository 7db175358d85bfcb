//! Quest use cases.
//!
//! The quest lifecycle: board listing, start, objective reports, abandon.
//! Completion is a side effect of reports (and of visits, handled in the
//! locations module), never a separate call.

mod abandon_quest;
mod error;
mod list_available;
mod report_objective;
mod start_quest;
mod types;

pub use abandon_quest::AbandonQuest;
pub use error::QuestError;
pub use list_available::ListAvailableQuests;
pub use report_objective::ReportObjective;
pub use start_quest::StartQuest;
pub use types::{QuestAvailability, QuestBoardEntry};

use std::sync::Arc;

/// Container for quest use cases.
pub struct QuestUseCases {
    pub start: Arc<StartQuest>,
    pub report_objective: Arc<ReportObjective>,
    pub abandon: Arc<AbandonQuest>,
    pub board: Arc<ListAvailableQuests>,
}

impl QuestUseCases {
    pub fn new(
        start: Arc<StartQuest>,
        report_objective: Arc<ReportObjective>,
        abandon: Arc<AbandonQuest>,
        board: Arc<ListAvailableQuests>,
    ) -> Self {
        Self {
            start,
            report_objective,
            abandon,
            board,
        }
    }
}
