//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    game_rules::GameRules,
    memory::MemoryStore,
    ports::{CharacterRepo, ClockPort, EventRepo, ItemRepo, LocationRepo, QuestRepo, RandomPort},
};
use crate::use_cases;

/// Main application state.
///
/// Holds all repository ports and use cases. Passed to whatever surface
/// drives the engine.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
    pub rules: GameRules,
}

/// Container for all repository ports.
pub struct Repositories {
    pub characters: Arc<dyn CharacterRepo>,
    pub items: Arc<dyn ItemRepo>,
    pub quests: Arc<dyn QuestRepo>,
    pub locations: Arc<dyn LocationRepo>,
    pub events: Arc<dyn EventRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub characters: use_cases::CharacterUseCases,
    pub quests: use_cases::QuestUseCases,
    pub locations: use_cases::LocationUseCases,
    pub events: use_cases::EventUseCases,
    pub items: use_cases::ItemUseCases,
    pub leaderboard: Arc<use_cases::GetLeaderboard>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        repositories: Repositories,
        rules: GameRules,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let characters = use_cases::CharacterUseCases::new(
            Arc::new(use_cases::characters::CreateCharacter::new(
                repositories.characters.clone(),
                clock.clone(),
            )),
            Arc::new(use_cases::characters::GetCharacter::new(
                repositories.characters.clone(),
            )),
            Arc::new(use_cases::characters::UpdateProfile::new(
                repositories.characters.clone(),
                clock.clone(),
            )),
            Arc::new(use_cases::characters::ListCharacters::new(
                repositories.characters.clone(),
            )),
            Arc::new(use_cases::characters::GrantExperience::new(
                repositories.characters.clone(),
                clock.clone(),
            )),
            Arc::new(use_cases::characters::GrantItem::new(
                repositories.characters.clone(),
                repositories.items.clone(),
                clock.clone(),
            )),
        );

        let quests = use_cases::QuestUseCases::new(
            Arc::new(use_cases::quests::StartQuest::new(
                repositories.characters.clone(),
                repositories.quests.clone(),
                clock.clone(),
            )),
            Arc::new(use_cases::quests::ReportObjective::new(
                repositories.characters.clone(),
                repositories.quests.clone(),
                clock.clone(),
                random.clone(),
            )),
            Arc::new(use_cases::quests::AbandonQuest::new(
                repositories.characters.clone(),
                clock.clone(),
            )),
            Arc::new(use_cases::quests::ListAvailableQuests::new(
                repositories.characters.clone(),
                repositories.quests.clone(),
            )),
        );

        let locations = use_cases::LocationUseCases::new(
            Arc::new(use_cases::locations::VisitLocation::new(
                repositories.characters.clone(),
                repositories.locations.clone(),
                repositories.quests.clone(),
                clock.clone(),
                random.clone(),
            )),
            Arc::new(use_cases::locations::ListLocations::new(
                repositories.characters.clone(),
                repositories.locations.clone(),
            )),
        );

        let events = use_cases::EventUseCases::new(
            Arc::new(use_cases::events::ParticipateInEvent::new(
                repositories.characters.clone(),
                repositories.events.clone(),
                repositories.quests.clone(),
                rules,
                clock.clone(),
                random.clone(),
            )),
            Arc::new(use_cases::events::ListActiveEvents::new(
                repositories.events.clone(),
                clock.clone(),
            )),
        );

        let items = use_cases::ItemUseCases::new(
            Arc::new(use_cases::items::PurchaseItem::new(
                repositories.characters.clone(),
                repositories.items.clone(),
                clock.clone(),
            )),
            Arc::new(use_cases::items::UseItem::new(
                repositories.characters.clone(),
                repositories.items.clone(),
                clock.clone(),
            )),
            Arc::new(use_cases::items::EquipItem::new(
                repositories.characters.clone(),
                repositories.items.clone(),
                clock.clone(),
            )),
            Arc::new(use_cases::items::UnequipItem::new(
                repositories.characters.clone(),
                clock.clone(),
            )),
        );

        let leaderboard = Arc::new(use_cases::GetLeaderboard::new(
            repositories.characters.clone(),
        ));

        Self {
            repositories,
            use_cases: UseCases {
                characters,
                quests,
                locations,
                events,
                items,
                leaderboard,
            },
            rules,
        }
    }

    /// Create an App backed by the in-memory store, with system clock and
    /// RNG. Returns the store so callers can seed catalog data.
    pub fn with_memory_store(rules: GameRules) -> (Self, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let repositories = Repositories {
            characters: store.clone(),
            items: store.clone(),
            quests: store.clone(),
            locations: store.clone(),
            events: store.clone(),
        };
        let app = Self::new(
            repositories,
            rules,
            Arc::new(SystemClock::new()),
            Arc::new(SystemRandom::new()),
        );
        (app, store)
    }
}
