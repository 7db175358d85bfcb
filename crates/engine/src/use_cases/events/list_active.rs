//! List active events use case.

use std::sync::Arc;

use emberhall_domain::Event;

use crate::infrastructure::ports::{ClockPort, EventRepo};

use super::error::EventError;

/// List active events use case. Catalog data, no authorization needed.
pub struct ListActiveEvents {
    events: Arc<dyn EventRepo>,
    clock: Arc<dyn ClockPort>,
}

impl ListActiveEvents {
    pub fn new(events: Arc<dyn EventRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { events, clock }
    }

    /// Events running right now, evaluated against the engine clock.
    pub async fn execute(&self) -> Result<Vec<Event>, EventError> {
        let now = self.clock.now();
        Ok(self.events.list_running(now).await?)
    }
}
