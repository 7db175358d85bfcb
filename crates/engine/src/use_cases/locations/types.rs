//! Result types for location use cases.

use emberhall_domain::{Character, Location, VisitOutcome};

/// A catalog location annotated with the viewing character's standing.
#[derive(Debug, Clone)]
pub struct LocationView {
    pub location: Location,
    /// Whether the character could enter right now.
    pub accessible: bool,
    /// Whether the location is on the character's unlocked list.
    pub visited: bool,
}

/// Outcome of a visit, with the character state after it.
#[derive(Debug, Clone)]
pub struct VisitLocationResult {
    pub character: Character,
    pub outcome: VisitOutcome,
}
