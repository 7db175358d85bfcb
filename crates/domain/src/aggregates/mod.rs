//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//!
//! # Rustic DDD Principles
//!
//! Instead of porting Java/C# DDD patterns, we leverage Rust's strengths:
//!
//! | Java DDD Pattern | Rustic Equivalent |
//! |------------------|-------------------|
//! | Private fields + getters | Newtypes valid by construction |
//! | Aggregate root guards | Ownership (borrow checker enforces) |
//! | Value Object immutability | `#[derive(Clone)]` + no `&mut` methods |
//! | Factory pattern | `::new()` + builder pattern |

pub mod character;

pub use character::{
    ActiveQuest, Character, CompletedQuest, ExperienceGrant, InventoryEntry, InventoryError,
    Loadout, ObjectiveReport, QuestCompletion, QuestProgressError, QuestStartError, VisitOutcome,
    DEFAULT_AVATAR,
};
