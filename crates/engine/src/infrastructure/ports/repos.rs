//! Repository port traits for database access.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use emberhall_domain::{
    Character, CharacterId, Event, EventId, Item, ItemId, Location, LocationId, Quest, QuestId,
    UserId,
};

use super::error::RepoError;

// =============================================================================
// Leaderboard
// =============================================================================

/// Which character figure a leaderboard is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardMetric {
    Experience,
    Points,
    Tokens,
    Level,
}

impl std::fmt::Display for LeaderboardMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaderboardMetric::Experience => write!(f, "experience"),
            LeaderboardMetric::Points => write!(f, "points"),
            LeaderboardMetric::Tokens => write!(f, "tokens"),
            LeaderboardMetric::Level => write!(f, "level"),
        }
    }
}

impl std::str::FromStr for LeaderboardMetric {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "experience" | "xp" => Ok(LeaderboardMetric::Experience),
            "points" => Ok(LeaderboardMetric::Points),
            "tokens" => Ok(LeaderboardMetric::Tokens),
            "level" => Ok(LeaderboardMetric::Level),
            _ => Err(()),
        }
    }
}

// =============================================================================
// Player State
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    // CRUD
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError>;
    async fn save(&self, character: &Character) -> Result<(), RepoError>;
    async fn delete(&self, id: CharacterId) -> Result<(), RepoError>;

    // Queries
    async fn get_by_user(&self, user_id: UserId) -> Result<Option<Character>, RepoError>;
    async fn list_by_owner(&self, user_id: UserId) -> Result<Vec<Character>, RepoError>;

    /// Top characters by `metric`, best first. Ties on `Level` are broken
    /// by raw experience.
    async fn list_top(
        &self,
        metric: LeaderboardMetric,
        limit: usize,
    ) -> Result<Vec<Character>, RepoError>;
}

// =============================================================================
// Catalog (one port per entity type)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepo: Send + Sync {
    async fn get(&self, id: ItemId) -> Result<Option<Item>, RepoError>;
    /// Fetch several items at once; IDs with no catalog entry are skipped.
    async fn get_many(&self, ids: &[ItemId]) -> Result<Vec<Item>, RepoError>;
    async fn save(&self, item: &Item) -> Result<(), RepoError>;
    async fn list(&self) -> Result<Vec<Item>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestRepo: Send + Sync {
    async fn get(&self, id: QuestId) -> Result<Option<Quest>, RepoError>;
    /// Fetch several quests at once; IDs with no catalog entry are skipped.
    async fn get_many(&self, ids: &[QuestId]) -> Result<Vec<Quest>, RepoError>;
    async fn save(&self, quest: &Quest) -> Result<(), RepoError>;
    async fn list(&self) -> Result<Vec<Quest>, RepoError>;
    /// Quests currently offered on the board.
    async fn list_active(&self) -> Result<Vec<Quest>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepo: Send + Sync {
    async fn get(&self, id: LocationId) -> Result<Option<Location>, RepoError>;
    async fn save(&self, location: &Location) -> Result<(), RepoError>;
    async fn list(&self) -> Result<Vec<Location>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepo: Send + Sync {
    async fn get(&self, id: EventId) -> Result<Option<Event>, RepoError>;
    async fn save(&self, event: &Event) -> Result<(), RepoError>;
    async fn list(&self) -> Result<Vec<Event>, RepoError>;
    /// Events whose window contains `now` and that are switched on.
    async fn list_running(&self, now: DateTime<Utc>) -> Result<Vec<Event>, RepoError>;
}
