//! Event use cases.

mod error;
mod list_active;
mod participate;
mod types;

pub use error::EventError;
pub use list_active::ListActiveEvents;
pub use participate::ParticipateInEvent;
pub use types::ParticipationResult;

use std::sync::Arc;

/// Container for event use cases.
pub struct EventUseCases {
    pub participate: Arc<ParticipateInEvent>,
    pub list_active: Arc<ListActiveEvents>,
}

impl EventUseCases {
    pub fn new(participate: Arc<ParticipateInEvent>, list_active: Arc<ListActiveEvents>) -> Self {
        Self {
            participate,
            list_active,
        }
    }
}
