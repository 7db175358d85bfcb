//! In-memory persistence backed by concurrent maps.
//!
//! This is the store the engine ships with: a single-process game keeps its
//! whole state resident and durable storage stays behind the repo ports, so
//! swapping in a database later touches nothing above this module.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use emberhall_domain::{
    Character, CharacterId, Event, EventId, Item, ItemId, Location, LocationId, Quest, QuestId,
    UserId,
};

use crate::infrastructure::ports::{
    CharacterRepo, EventRepo, ItemRepo, LeaderboardMetric, LocationRepo, QuestRepo, RepoError,
};

/// Concurrent in-memory store implementing every repository port.
///
/// One instance backs all five ports; `App::with_memory_store` clones the
/// `Arc` into each port slot.
#[derive(Default)]
pub struct MemoryStore {
    characters: DashMap<CharacterId, Character>,
    items: DashMap<ItemId, Item>,
    quests: DashMap<QuestId, Quest>,
    locations: DashMap<LocationId, Location>,
    events: DashMap<EventId, Event>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Seeding (catalog bootstrap at startup, fixtures in tests)
    // =========================================================================

    pub fn seed_items(&self, items: impl IntoIterator<Item = Item>) {
        for item in items {
            self.items.insert(item.id, item);
        }
    }

    pub fn seed_quests(&self, quests: impl IntoIterator<Item = Quest>) {
        for quest in quests {
            self.quests.insert(quest.id, quest);
        }
    }

    pub fn seed_locations(&self, locations: impl IntoIterator<Item = Location>) {
        for location in locations {
            self.locations.insert(location.id, location);
        }
    }

    pub fn seed_events(&self, events: impl IntoIterator<Item = Event>) {
        for event in events {
            self.events.insert(event.id, event);
        }
    }
}

// =============================================================================
// CharacterRepo
// =============================================================================

#[async_trait]
impl CharacterRepo for MemoryStore {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        Ok(self.characters.get(&id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, character: &Character) -> Result<(), RepoError> {
        self.characters.insert(character.id(), character.clone());
        Ok(())
    }

    async fn delete(&self, id: CharacterId) -> Result<(), RepoError> {
        self.characters
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found("character", id))
    }

    async fn get_by_user(&self, user_id: UserId) -> Result<Option<Character>, RepoError> {
        Ok(self
            .characters
            .iter()
            .find(|entry| entry.value().owner_user_id() == user_id)
            .map(|entry| entry.value().clone()))
    }

    async fn list_by_owner(&self, user_id: UserId) -> Result<Vec<Character>, RepoError> {
        let mut owned: Vec<Character> = self
            .characters
            .iter()
            .filter(|entry| entry.value().owner_user_id() == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        owned.sort_by_key(|character| character.created_at());
        Ok(owned)
    }

    async fn list_top(
        &self,
        metric: LeaderboardMetric,
        limit: usize,
    ) -> Result<Vec<Character>, RepoError> {
        let mut all: Vec<Character> = self
            .characters
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by(|a, b| match metric {
            LeaderboardMetric::Experience => b.experience().cmp(&a.experience()),
            LeaderboardMetric::Points => b.points().cmp(&a.points()),
            LeaderboardMetric::Tokens => b.tokens().cmp(&a.tokens()),
            LeaderboardMetric::Level => b
                .level()
                .cmp(&a.level())
                .then_with(|| b.experience().cmp(&a.experience())),
        });
        all.truncate(limit);
        Ok(all)
    }
}

// =============================================================================
// ItemRepo
// =============================================================================

#[async_trait]
impl ItemRepo for MemoryStore {
    async fn get(&self, id: ItemId) -> Result<Option<Item>, RepoError> {
        Ok(self.items.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_many(&self, ids: &[ItemId]) -> Result<Vec<Item>, RepoError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.items.get(id).map(|entry| entry.value().clone()))
            .collect())
    }

    async fn save(&self, item: &Item) -> Result<(), RepoError> {
        self.items.insert(item.id, item.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Item>, RepoError> {
        let mut all: Vec<Item> = self
            .items
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(all)
    }
}

// =============================================================================
// QuestRepo
// =============================================================================

#[async_trait]
impl QuestRepo for MemoryStore {
    async fn get(&self, id: QuestId) -> Result<Option<Quest>, RepoError> {
        Ok(self.quests.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_many(&self, ids: &[QuestId]) -> Result<Vec<Quest>, RepoError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.quests.get(id).map(|entry| entry.value().clone()))
            .collect())
    }

    async fn save(&self, quest: &Quest) -> Result<(), RepoError> {
        self.quests.insert(quest.id, quest.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Quest>, RepoError> {
        let mut all: Vec<Quest> = self
            .quests
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(all)
    }

    async fn list_active(&self) -> Result<Vec<Quest>, RepoError> {
        let mut active: Vec<Quest> = self
            .quests
            .iter()
            .filter(|entry| entry.value().is_active)
            .map(|entry| entry.value().clone())
            .collect();
        active.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(active)
    }
}

// =============================================================================
// LocationRepo
// =============================================================================

#[async_trait]
impl LocationRepo for MemoryStore {
    async fn get(&self, id: LocationId) -> Result<Option<Location>, RepoError> {
        Ok(self.locations.get(&id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, location: &Location) -> Result<(), RepoError> {
        self.locations.insert(location.id, location.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Location>, RepoError> {
        let mut all: Vec<Location> = self
            .locations
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(all)
    }
}

// =============================================================================
// EventRepo
// =============================================================================

#[async_trait]
impl EventRepo for MemoryStore {
    async fn get(&self, id: EventId) -> Result<Option<Event>, RepoError> {
        Ok(self.events.get(&id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, event: &Event) -> Result<(), RepoError> {
        self.events.insert(event.id, event.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Event>, RepoError> {
        let mut all: Vec<Event> = self
            .events
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by_key(|event| event.start_at);
        Ok(all)
    }

    async fn list_running(&self, now: DateTime<Utc>) -> Result<Vec<Event>, RepoError> {
        let mut running: Vec<Event> = self
            .events
            .iter()
            .filter(|entry| entry.value().is_running(now))
            .map(|entry| entry.value().clone())
            .collect();
        running.sort_by_key(|event| event.start_at);
        Ok(running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use emberhall_domain::{CharacterName, EventType, ItemName, ItemType, LocationName, Rarity};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 20, 0, 0).unwrap()
    }

    fn character(name: &str, experience: u64, points: u64) -> Character {
        Character::new(
            UserId::new(),
            CharacterName::new(name).unwrap(),
            now(),
        )
        .with_experience(experience)
        .with_points(points)
    }

    // Several ports share method names (`save`, `get_many`), so these tests
    // call through the trait paths.

    #[tokio::test]
    async fn character_round_trips_through_store() {
        let store = MemoryStore::new();
        let character = character("Silas", 150, 40);
        let id = character.id();

        CharacterRepo::save(&store, &character).await.unwrap();
        let loaded = CharacterRepo::get(&store, id).await.unwrap().unwrap();

        assert_eq!(loaded.id(), id);
        assert_eq!(loaded.experience(), 150);
        assert_eq!(loaded.level(), 2);
    }

    #[tokio::test]
    async fn get_by_user_finds_the_owner() {
        let store = MemoryStore::new();
        let character = character("Mira", 0, 0);
        let owner = character.owner_user_id();
        CharacterRepo::save(&store, &character).await.unwrap();

        let found = store.get_by_user(owner).await.unwrap();
        assert_eq!(found.map(|c| c.id()), Some(character.id()));

        let missing = store.get_by_user(UserId::new()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn delete_of_missing_character_reports_not_found() {
        let store = MemoryStore::new();
        let err = CharacterRepo::delete(&store, CharacterId::new())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn list_top_orders_by_metric_descending() {
        let store = MemoryStore::new();
        let low = character("Low", 50, 900);
        let high = character("High", 500, 10);
        CharacterRepo::save(&store, &low).await.unwrap();
        CharacterRepo::save(&store, &high).await.unwrap();

        let by_xp = store
            .list_top(LeaderboardMetric::Experience, 10)
            .await
            .unwrap();
        assert_eq!(by_xp[0].id(), high.id());

        let by_points = store.list_top(LeaderboardMetric::Points, 10).await.unwrap();
        assert_eq!(by_points[0].id(), low.id());
    }

    #[tokio::test]
    async fn level_ties_break_on_experience() {
        let store = MemoryStore::new();
        // Both level 2, but 199 xp beats 100 xp within the level.
        let ahead = character("Ahead", 199, 0);
        let behind = character("Behind", 100, 0);
        CharacterRepo::save(&store, &behind).await.unwrap();
        CharacterRepo::save(&store, &ahead).await.unwrap();

        let board = store.list_top(LeaderboardMetric::Level, 10).await.unwrap();
        assert_eq!(board[0].id(), ahead.id());
        assert_eq!(board[1].id(), behind.id());
    }

    #[tokio::test]
    async fn list_top_respects_limit() {
        let store = MemoryStore::new();
        for i in 0..5 {
            CharacterRepo::save(&store, &character(&format!("C{i}"), i * 100, 0))
                .await
                .unwrap();
        }
        let board = store.list_top(LeaderboardMetric::Experience, 3).await.unwrap();
        assert_eq!(board.len(), 3);
    }

    #[tokio::test]
    async fn get_many_skips_unknown_ids() {
        let store = MemoryStore::new();
        let item = Item::new(ItemName::new("Clay Bowl").unwrap(), ItemType::Accessory)
            .with_rarity(Rarity::Common);
        store.seed_items([item.clone()]);

        let found = ItemRepo::get_many(&store, &[item.id, ItemId::new()])
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, item.id);
    }

    #[tokio::test]
    async fn list_active_filters_switched_off_quests() {
        let store = MemoryStore::new();
        let open = Quest::new("Open Door", emberhall_domain::QuestType::Side);
        let mut closed = Quest::new("Closed Door", emberhall_domain::QuestType::Side);
        closed.is_active = false;
        store.seed_quests([open.clone(), closed]);

        let board = store.list_active().await.unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].id, open.id);
    }

    #[tokio::test]
    async fn list_running_filters_by_window() {
        let store = MemoryStore::new();
        let running = Event::new(
            "Evening Tasting",
            EventType::Seasonal,
            now() - chrono::Duration::hours(1),
            now() + chrono::Duration::hours(1),
        );
        let over = Event::new(
            "Last Week",
            EventType::Seasonal,
            now() - chrono::Duration::days(8),
            now() - chrono::Duration::days(7),
        );
        store.seed_events([running.clone(), over]);

        let live = store.list_running(now()).await.unwrap();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].id, running.id);
    }

    #[tokio::test]
    async fn locations_list_sorted_by_name() {
        let store = MemoryStore::new();
        let b = Location::new(
            LocationName::new("Velvet Cellar").unwrap(),
            emberhall_domain::LocationType::Lounge,
        );
        let a = Location::new(
            LocationName::new("Ember Hall").unwrap(),
            emberhall_domain::LocationType::Lounge,
        );
        store.seed_locations([b, a]);

        let all = LocationRepo::list(&store).await.unwrap();
        assert_eq!(all[0].name.as_str(), "Ember Hall");
        assert_eq!(all[1].name.as_str(), "Velvet Cellar");
    }
}
