//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod game_rules;
pub mod memory;
pub mod ports;

pub use game_rules::{EventParticipationPolicy, GameRules};
pub use memory::MemoryStore;
