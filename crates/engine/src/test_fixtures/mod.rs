//! Common test fixtures and harness helpers.
//!
//! Provides a small consistent game catalog plus an [`App`] wired over the
//! in-memory store with a pinned clock and scripted RNG, so integration
//! tests read as gameplay scripts.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{test_app, fixture_time};
//!
//! #[tokio::test]
//! async fn visit_drops_item() {
//!     let (app, _store, fixture) = test_app(vec![0.1]);
//!     // ... drive app.use_cases
//! }
//! ```

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use emberhall_domain::{
    Event, EventType, Item, ItemEffects, ItemName, ItemType, ItemValue, Location, LocationName,
    LocationType, Objective, ObjectiveKind, Quest, QuestType, RewardTemplate, SkillKind,
    UnlockRequirements,
};

use crate::app::{App, Repositories};
use crate::infrastructure::clock::{FixedClock, ScriptedRandom};
use crate::infrastructure::game_rules::GameRules;
use crate::infrastructure::memory::MemoryStore;

/// The instant every harness clock is pinned to.
pub fn fixture_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 20, 0, 0).unwrap()
}

/// Install a test subscriber so `tracing` output lands in the captured
/// test output. Safe to call from every test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("emberhall_engine=debug")
        .try_init();
}

// =============================================================================
// Game Catalog Fixture
// =============================================================================

/// A small consistent catalog: five items, three locations, three quests,
/// and one event running around [`fixture_time`].
pub struct GameFixture {
    // Items
    /// Equippable cigar, priced at 120 points.
    pub maduro_reserve: Item,
    /// Equippable hookah flavor, priced at 80 points.
    pub double_apple: Item,
    /// Equippable accessory, priced at 150 points.
    pub silver_tongs: Item,
    /// Collectible with no store price.
    pub vintage_matchbook: Item,
    /// Consumable that raises aroma expertise, priced at 40 points.
    pub tasting_sampler: Item,

    // Locations
    /// Open lounge with a 60% matchbook drop.
    pub ember_hall: Location,
    /// Locked cellar, opens at level 5.
    pub velvet_cellar: Location,
    /// Open store.
    pub spice_bazaar: Location,

    // Quests
    /// One visit objective at the Ember Hall, pays 100 xp.
    pub first_light: Quest,
    /// Collect-and-show quest with two objectives.
    pub collectors_itch: Quest,
    /// Repeatable daily with one objective.
    pub daily_draw: Quest,

    // Events
    /// Seasonal event linked to the daily draw quest.
    pub harvest_tasting: Event,
}

impl GameFixture {
    /// Build the catalog. The event window brackets `now`.
    pub fn build(now: DateTime<Utc>) -> Self {
        let maduro_reserve =
            Item::new(ItemName::new("Maduro Reserve").unwrap(), ItemType::Cigar)
                .with_description("A dark, oily wrapper with a long finish.")
                .with_value(ItemValue {
                    points: 120,
                    tokens: 0,
                });
        let double_apple = Item::new(
            ItemName::new("Double Apple").unwrap(),
            ItemType::HookahFlavor,
        )
        .with_value(ItemValue {
            points: 80,
            tokens: 0,
        });
        let silver_tongs =
            Item::new(ItemName::new("Silver Tongs").unwrap(), ItemType::Accessory).with_value(
                ItemValue {
                    points: 150,
                    tokens: 0,
                },
            );
        let vintage_matchbook = Item::new(
            ItemName::new("Vintage Matchbook").unwrap(),
            ItemType::Collectible,
        );
        let tasting_sampler = Item::new(
            ItemName::new("Tasting Sampler").unwrap(),
            ItemType::Consumable,
        )
        .with_effects(ItemEffects::skill(SkillKind::AromaExpertise, 2))
        .with_value(ItemValue {
            points: 40,
            tokens: 0,
        });

        let ember_hall = Location::new(
            LocationName::new("The Ember Hall").unwrap(),
            LocationType::Lounge,
        )
        .with_description("The house lounge where every evening starts.")
        .with_drop(vintage_matchbook.id, 60);
        let velvet_cellar = Location::new(
            LocationName::new("Velvet Cellar").unwrap(),
            LocationType::Special,
        )
        .locked(UnlockRequirements::min_level(5));
        let spice_bazaar = Location::new(
            LocationName::new("Spice Bazaar").unwrap(),
            LocationType::Store,
        );

        let first_light = Quest::new("First Light", QuestType::Main)
            .with_objective(Objective::visit("Step into the Ember Hall", ember_hall.id))
            .with_rewards(RewardTemplate::currency(100, 0, 0));
        let collectors_itch = Quest::new("Collector's Itch", QuestType::Side)
            .with_objective(Objective::collect(
                "Find a vintage matchbook",
                vintage_matchbook.id,
                1,
            ))
            .with_objective(Objective::new(
                "Show it to the lounge master",
                ObjectiveKind::TalkToNpc,
            ))
            .with_rewards(RewardTemplate::currency(50, 25, 0));
        let daily_draw = Quest::new("Daily Draw", QuestType::Daily)
            .with_repeatable(true)
            .with_objective(Objective::new(
                "Share a smoke with a regular",
                ObjectiveKind::Custom,
            ))
            .with_rewards(RewardTemplate::currency(20, 0, 1));

        let harvest_tasting = Event::new(
            "Harvest Tasting",
            EventType::Seasonal,
            now - Duration::days(1),
            now + Duration::days(6),
        )
        .with_rewards(RewardTemplate::currency(40, 0, 5))
        .with_linked_quest(daily_draw.id);

        Self {
            maduro_reserve,
            double_apple,
            silver_tongs,
            vintage_matchbook,
            tasting_sampler,
            ember_hall,
            velvet_cellar,
            spice_bazaar,
            first_light,
            collectors_itch,
            daily_draw,
            harvest_tasting,
        }
    }

    /// Insert the whole catalog into a store.
    pub fn seed(&self, store: &MemoryStore) {
        store.seed_items([
            self.maduro_reserve.clone(),
            self.double_apple.clone(),
            self.silver_tongs.clone(),
            self.vintage_matchbook.clone(),
            self.tasting_sampler.clone(),
        ]);
        store.seed_locations([
            self.ember_hall.clone(),
            self.velvet_cellar.clone(),
            self.spice_bazaar.clone(),
        ]);
        store.seed_quests([
            self.first_light.clone(),
            self.collectors_itch.clone(),
            self.daily_draw.clone(),
        ]);
        store.seed_events([self.harvest_tasting.clone()]);
    }
}

// =============================================================================
// App Harness
// =============================================================================

/// An [`App`] over a seeded in-memory store, with the clock pinned to
/// [`fixture_time`] and the RNG scripted with `draws` (exhausted draws
/// return 0.99, which fails every chance roll below 100).
pub fn test_app(draws: Vec<f64>) -> (App, Arc<MemoryStore>, GameFixture) {
    test_app_with_rules(draws, GameRules::default())
}

/// Same as [`test_app`] with an explicit rule set.
pub fn test_app_with_rules(
    draws: Vec<f64>,
    rules: GameRules,
) -> (App, Arc<MemoryStore>, GameFixture) {
    let store = Arc::new(MemoryStore::new());
    let fixture = GameFixture::build(fixture_time());
    fixture.seed(&store);

    let repositories = Repositories {
        characters: store.clone(),
        items: store.clone(),
        quests: store.clone(),
        locations: store.clone(),
        events: store.clone(),
    };
    let app = App::new(
        repositories,
        rules,
        Arc::new(FixedClock(fixture_time())),
        Arc::new(ScriptedRandom::new(draws)),
    );
    (app, store, fixture)
}
