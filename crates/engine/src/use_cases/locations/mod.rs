//! Location use cases.

mod error;
mod list_locations;
mod types;
mod visit_location;

pub use error::LocationError;
pub use list_locations::ListLocations;
pub use types::{LocationView, VisitLocationResult};
pub use visit_location::VisitLocation;

use std::sync::Arc;

/// Container for location use cases.
pub struct LocationUseCases {
    pub visit: Arc<VisitLocation>,
    pub list: Arc<ListLocations>,
}

impl LocationUseCases {
    pub fn new(visit: Arc<VisitLocation>, list: Arc<ListLocations>) -> Self {
        Self { visit, list }
    }
}
