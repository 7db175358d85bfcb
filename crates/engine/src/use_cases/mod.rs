//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate the character aggregate and the catalog through
//! repository ports; none of them touch storage directly.

pub mod characters;
pub mod events;
pub mod guard;
pub mod items;
pub mod leaderboard;
pub mod locations;
pub mod quests;

pub use characters::CharacterUseCases;
pub use events::EventUseCases;
pub use guard::{Actor, Role};
pub use items::ItemUseCases;
pub use leaderboard::GetLeaderboard;
pub use locations::LocationUseCases;
pub use quests::QuestUseCases;
