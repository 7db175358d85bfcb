//! Character aggregate - one player's complete progression state
//!
//! # Rustic DDD Design
//!
//! This aggregate follows Rustic DDD principles:
//! - **Private fields**: All fields are encapsulated
//! - **Newtypes**: `CharacterName` for validated name
//! - **Valid by construction**: `new()` takes pre-validated types
//! - **Derived level**: level is always `level_for_experience(experience)`
//!
//! Every state transition (quest start, objective progress, visits, event
//! participation, inventory changes) is a method here, so a transition
//! either happens completely on the in-memory aggregate or not at all.
//! Callers persist the whole aggregate with a single save afterwards.
//!
//! Chance-based outcomes take a `roll` closure returning a value in
//! `[0.0, 1.0)`. Production wires in a real RNG; tests script the draws.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::entities::{EquipSlot, Event, Item, Location, Quest};
use crate::ids::{CharacterId, EventId, ItemId, LocationId, QuestId, UserId};
use crate::progression::level_for_experience;
use crate::value_objects::{CharacterName, GrantedRewards, ItemStack, RewardTemplate, SkillSet};

/// Avatar assigned to characters created without an explicit one.
pub const DEFAULT_AVATAR: &str = "default-avatar.png";

// ============================================================================
// Sub-records
// ============================================================================

/// One stack of a catalog item held by a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryEntry {
    pub item_id: ItemId,
    pub quantity: u32,
    /// When the first unit of this stack was acquired.
    pub acquired_at: DateTime<Utc>,
}

/// Currently equipped items, one optional slot per equipment kind
///
/// Slots are exclusive by construction: there is exactly one field per
/// [`EquipSlot`], so two items can never occupy the same slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Loadout {
    pub cigar: Option<ItemId>,
    pub hookah: Option<ItemId>,
    pub accessory: Option<ItemId>,
}

impl Loadout {
    /// Item currently occupying `slot`, if any.
    pub fn in_slot(&self, slot: EquipSlot) -> Option<ItemId> {
        match slot {
            EquipSlot::Cigar => self.cigar,
            EquipSlot::Hookah => self.hookah,
            EquipSlot::Accessory => self.accessory,
        }
    }

    /// The slot `item_id` is equipped in, if any.
    pub fn slot_of(&self, item_id: ItemId) -> Option<EquipSlot> {
        [EquipSlot::Cigar, EquipSlot::Hookah, EquipSlot::Accessory]
            .into_iter()
            .find(|slot| self.in_slot(*slot) == Some(item_id))
    }

    fn set(&mut self, slot: EquipSlot, item_id: Option<ItemId>) -> Option<ItemId> {
        let target = match slot {
            EquipSlot::Cigar => &mut self.cigar,
            EquipSlot::Hookah => &mut self.hookah,
            EquipSlot::Accessory => &mut self.accessory,
        };
        std::mem::replace(target, item_id)
    }
}

/// A quest in progress, with a per-character snapshot of objective state
///
/// The snapshot is keyed by objective index and never points back into the
/// shared catalog, so catalog edits cannot corrupt in-flight progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveQuest {
    quest_id: QuestId,
    objectives_done: Vec<bool>,
    progress_percent: u8,
    started_at: DateTime<Utc>,
}

impl ActiveQuest {
    fn start(quest: &Quest, now: DateTime<Utc>) -> Self {
        Self {
            quest_id: quest.id,
            objectives_done: vec![false; quest.objectives.len()],
            progress_percent: 0,
            started_at: now,
        }
    }

    #[inline]
    pub fn quest_id(&self) -> QuestId {
        self.quest_id
    }

    /// Completion flags, indexed like the quest's objective list at the
    /// time the quest was started.
    #[inline]
    pub fn objectives_done(&self) -> &[bool] {
        &self.objectives_done
    }

    /// Floored percentage of objectives done. A quest with no objectives
    /// stays at zero forever.
    #[inline]
    pub fn progress_percent(&self) -> u8 {
        self.progress_percent
    }

    #[inline]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    fn recompute_progress(&mut self) {
        self.progress_percent = if self.objectives_done.is_empty() {
            0
        } else {
            let done = self.objectives_done.iter().filter(|d| **d).count();
            (done * 100 / self.objectives_done.len()) as u8
        };
    }
}

/// Append-only record of a finished quest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedQuest {
    pub quest_id: QuestId,
    pub completed_at: DateTime<Utc>,
    /// What the completion actually paid out, chance rolls included.
    pub rewards_granted: GrantedRewards,
}

// ============================================================================
// Transition errors
// ============================================================================

/// Why a quest could not be started
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestStartError {
    #[error("quest is already active")]
    AlreadyActive,

    #[error("quest is already completed")]
    AlreadyCompleted,

    #[error("requirements not met: {0}")]
    NotEligible(String),
}

/// Why quest progress could not be recorded
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestProgressError {
    #[error("quest is not active for this character")]
    QuestNotActive,

    #[error("objective index {index} out of range ({objective_count} objectives)")]
    InvalidObjective {
        index: usize,
        objective_count: usize,
    },
}

/// Why an inventory or currency operation failed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("item {0} is not held")]
    ItemNotHeld(ItemId),

    #[error("insufficient points: have {available}, need {required}")]
    InsufficientFunds { available: u64, required: u64 },

    #[error("item {0} cannot be equipped")]
    NotEquippable(ItemId),

    #[error("item {0} is not equipped")]
    NotEquipped(ItemId),
}

// ============================================================================
// Transition outcomes
// ============================================================================

/// Outcome of adding experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceGrant {
    pub leveled_up: bool,
    pub new_level: u32,
}

/// Outcome of recording objective progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveReport {
    pub progress_percent: u8,
    pub quest_completed: bool,
    /// Present only when this report completed the quest.
    pub rewards: Option<GrantedRewards>,
}

/// One quest auto-completed as a side effect of a visit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestCompletion {
    pub quest_id: QuestId,
    pub rewards: GrantedRewards,
}

/// Everything that happened during one location visit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitOutcome {
    /// Whether this visit added the location to the unlocked list.
    pub newly_unlocked: bool,
    /// Items that dropped, one entry per successful roll.
    pub items_found: Vec<ItemId>,
    /// Quests whose last open objective was a visit here.
    pub quests_completed: Vec<QuestCompletion>,
}

// ============================================================================
// Character aggregate
// ============================================================================

/// A player's character: identity, progression, inventory, and quest state
///
/// # Invariants
///
/// - `level` is always derived from `experience`
/// - skill ratings stay within `[SKILL_MIN, SKILL_MAX]`
/// - inventory quantities are never zero (empty stacks are removed)
/// - every equipped item has an inventory entry
/// - `completed_quests` and `participated_events` only ever grow
#[derive(Debug, Clone)]
pub struct Character {
    // Identity
    id: CharacterId,
    owner_user_id: UserId,
    name: CharacterName,
    avatar: String,

    // Progression
    experience: u64,
    level: u32,
    points: u64,
    tokens: u64,
    skills: SkillSet,

    // Possessions
    inventory: Vec<InventoryEntry>,
    loadout: Loadout,

    // World state
    unlocked_locations: Vec<LocationId>,
    active_quests: Vec<ActiveQuest>,
    completed_quests: Vec<CompletedQuest>,
    participated_events: Vec<EventId>,

    // Metadata
    created_at: DateTime<Utc>,
    last_played: DateTime<Utc>,
}

impl Character {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a fresh level-1 character owned by `owner_user_id`.
    ///
    /// The `name` parameter must be a pre-validated `CharacterName` -
    /// validation happens when creating the `CharacterName`, not here.
    pub fn new(owner_user_id: UserId, name: CharacterName, now: DateTime<Utc>) -> Self {
        Self {
            id: CharacterId::new(),
            owner_user_id,
            name,
            avatar: DEFAULT_AVATAR.to_string(),
            experience: 0,
            level: level_for_experience(0),
            points: 0,
            tokens: 0,
            skills: SkillSet::new(),
            inventory: Vec::new(),
            loadout: Loadout::default(),
            unlocked_locations: Vec::new(),
            active_quests: Vec::new(),
            completed_quests: Vec::new(),
            participated_events: Vec::new(),
            created_at: now,
            last_played: now,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    #[inline]
    pub fn owner_user_id(&self) -> UserId {
        self.owner_user_id
    }

    #[inline]
    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    #[inline]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    #[inline]
    pub fn experience(&self) -> u64 {
        self.experience
    }

    /// Current level, derived from experience.
    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn points(&self) -> u64 {
        self.points
    }

    #[inline]
    pub fn tokens(&self) -> u64 {
        self.tokens
    }

    #[inline]
    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    #[inline]
    pub fn inventory(&self) -> &[InventoryEntry] {
        &self.inventory
    }

    #[inline]
    pub fn loadout(&self) -> &Loadout {
        &self.loadout
    }

    #[inline]
    pub fn unlocked_locations(&self) -> &[LocationId] {
        &self.unlocked_locations
    }

    #[inline]
    pub fn active_quests(&self) -> &[ActiveQuest] {
        &self.active_quests
    }

    #[inline]
    pub fn completed_quests(&self) -> &[CompletedQuest] {
        &self.completed_quests
    }

    #[inline]
    pub fn participated_events(&self) -> &[EventId] {
        &self.participated_events
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn last_played(&self) -> DateTime<Utc> {
        self.last_played
    }

    // =========================================================================
    // Builder Methods (for construction and loading from storage)
    // =========================================================================

    /// Set the character's ID (used when loading from storage).
    pub fn with_id(mut self, id: CharacterId) -> Self {
        self.id = id;
        self
    }

    /// Set the avatar.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    /// Set lifetime experience; level is re-derived.
    pub fn with_experience(mut self, experience: u64) -> Self {
        self.experience = experience;
        self.level = level_for_experience(experience);
        self
    }

    /// Set the points balance.
    pub fn with_points(mut self, points: u64) -> Self {
        self.points = points;
        self
    }

    /// Set the tokens balance.
    pub fn with_tokens(mut self, tokens: u64) -> Self {
        self.tokens = tokens;
        self
    }

    /// Set the skill ratings.
    pub fn with_skills(mut self, skills: SkillSet) -> Self {
        self.skills = skills;
        self
    }

    // =========================================================================
    // Profile mutations
    // =========================================================================

    /// Rename the character.
    pub fn rename(&mut self, name: CharacterName) {
        self.name = name;
    }

    /// Change the avatar.
    pub fn set_avatar(&mut self, avatar: impl Into<String>) {
        self.avatar = avatar.into();
    }

    /// Update the last played timestamp.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_played = now;
    }

    // =========================================================================
    // Progression
    // =========================================================================

    /// Add lifetime experience and re-derive the level.
    ///
    /// Experience never decreases; amounts of zero are a no-op that still
    /// reports the current level.
    pub fn add_experience(&mut self, amount: u64) -> ExperienceGrant {
        let previous_level = self.level;
        self.experience = self.experience.saturating_add(amount);
        self.level = level_for_experience(self.experience);
        ExperienceGrant {
            leveled_up: self.level > previous_level,
            new_level: self.level,
        }
    }

    /// Add to the points balance.
    pub fn add_points(&mut self, amount: u64) {
        self.points = self.points.saturating_add(amount);
    }

    /// Add to the tokens balance.
    pub fn add_tokens(&mut self, amount: u64) {
        self.tokens = self.tokens.saturating_add(amount);
    }

    /// Deduct points, failing without partial deduction if the balance is
    /// too low.
    pub fn spend_points(&mut self, price: u64) -> Result<(), InventoryError> {
        if self.points < price {
            return Err(InventoryError::InsufficientFunds {
                available: self.points,
                required: price,
            });
        }
        self.points -= price;
        Ok(())
    }

    /// Resolve a reward template against this character.
    ///
    /// Currencies are added outright. Each item line takes one draw from
    /// `roll` and is granted iff `draw * 100 < chance_percent`, so a
    /// chance of 100 always pays and 0 never does. Locations already
    /// unlocked are not repeated in the returned record.
    pub fn apply_rewards(
        &mut self,
        template: &RewardTemplate,
        now: DateTime<Utc>,
        roll: &mut dyn FnMut() -> f64,
    ) -> GrantedRewards {
        let grant = self.add_experience(template.experience);
        self.add_points(template.points);
        self.add_tokens(template.tokens);

        let mut items = Vec::new();
        for line in &template.items {
            let draw = roll();
            if draw * 100.0 < f64::from(line.chance_percent) {
                self.grant_item(line.item_id, line.quantity, now);
                items.push(ItemStack::new(line.item_id, line.quantity));
            }
        }

        let mut unlocked = Vec::new();
        for location_id in &template.unlocked_locations {
            if self.unlock_location(*location_id) {
                unlocked.push(*location_id);
            }
        }

        GrantedRewards {
            experience: template.experience,
            points: template.points,
            tokens: template.tokens,
            items,
            unlocked_locations: unlocked,
            leveled_up: grant.leveled_up,
            new_level: grant.new_level,
        }
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    /// Quantity of one item currently held.
    pub fn item_quantity(&self, item_id: ItemId) -> u32 {
        self.inventory
            .iter()
            .find(|entry| entry.item_id == item_id)
            .map(|entry| entry.quantity)
            .unwrap_or(0)
    }

    /// Whether at least `quantity` units of the item are held.
    pub fn has_item(&self, item_id: ItemId, quantity: u32) -> bool {
        self.item_quantity(item_id) >= quantity
    }

    /// Add units of an item, merging into an existing stack when one
    /// exists. Granting zero units is a no-op.
    pub fn grant_item(&mut self, item_id: ItemId, quantity: u32, now: DateTime<Utc>) {
        if quantity == 0 {
            return;
        }
        match self
            .inventory
            .iter_mut()
            .find(|entry| entry.item_id == item_id)
        {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(quantity),
            None => self.inventory.push(InventoryEntry {
                item_id,
                quantity,
                acquired_at: now,
            }),
        }
    }

    /// Use one unit of an item: decrement the stack and apply the item's
    /// fixed effects. Returns the remaining quantity.
    ///
    /// Consuming the last unit removes the stack and clears the item from
    /// the loadout if it was equipped.
    pub fn use_item(&mut self, item: &Item) -> Result<u32, InventoryError> {
        let position = self
            .inventory
            .iter()
            .position(|entry| entry.item_id == item.id && entry.quantity > 0)
            .ok_or(InventoryError::ItemNotHeld(item.id))?;

        self.inventory[position].quantity -= 1;
        let remaining = self.inventory[position].quantity;
        if remaining == 0 {
            self.inventory.remove(position);
            if let Some(slot) = self.loadout.slot_of(item.id) {
                self.loadout.set(slot, None);
            }
        }

        if let Some(boost) = item.effects.skill_boost {
            self.skills.adjust(boost.skill, boost.value);
        }
        self.add_points(item.effects.points_boost);
        self.add_tokens(item.effects.tokens_boost);

        Ok(remaining)
    }

    /// Whether the item currently occupies any loadout slot.
    pub fn is_equipped(&self, item_id: ItemId) -> bool {
        self.loadout.slot_of(item_id).is_some()
    }

    /// Equip a held item into its slot, returning the item it displaced
    /// (which stays in the inventory).
    pub fn equip(&mut self, item: &Item) -> Result<Option<ItemId>, InventoryError> {
        if !self.has_item(item.id, 1) {
            return Err(InventoryError::ItemNotHeld(item.id));
        }
        let slot = item
            .equip_slot()
            .ok_or(InventoryError::NotEquippable(item.id))?;
        let replaced = self.loadout.set(slot, Some(item.id));
        Ok(replaced.filter(|previous| *previous != item.id))
    }

    /// Clear an item from the loadout. The item stays in the inventory.
    pub fn unequip(&mut self, item_id: ItemId) -> Result<(), InventoryError> {
        match self.loadout.slot_of(item_id) {
            Some(slot) => {
                self.loadout.set(slot, None);
                Ok(())
            }
            None => Err(InventoryError::NotEquipped(item_id)),
        }
    }

    // =========================================================================
    // Locations
    // =========================================================================

    /// Whether the location is already on the unlocked list.
    pub fn has_unlocked(&self, location_id: LocationId) -> bool {
        self.unlocked_locations.contains(&location_id)
    }

    /// Add a location to the unlocked list. Returns true when this call
    /// added it, false when it was already present.
    pub fn unlock_location(&mut self, location_id: LocationId) -> bool {
        if self.has_unlocked(location_id) {
            return false;
        }
        self.unlocked_locations.push(location_id);
        true
    }

    /// Whether this character can currently enter the location.
    ///
    /// Inactive locations are closed to everyone. Open locations admit
    /// everyone. Locked locations admit characters who have the location
    /// on their unlocked list, or who meet every unlock requirement at
    /// once: the level floor, all listed quests completed, all listed
    /// items held. Recomputed on every read; nothing is cached beyond the
    /// explicit unlocked list.
    pub fn can_access(&self, location: &Location) -> bool {
        if !location.is_active {
            return false;
        }
        if !location.is_locked || self.has_unlocked(location.id) {
            return true;
        }
        let requirements = &location.unlock_requirements;
        self.level >= requirements.level
            && requirements
                .quests
                .iter()
                .all(|quest_id| self.has_completed_quest(*quest_id))
            && requirements
                .items
                .iter()
                .all(|stack| self.has_item(stack.item_id, stack.quantity))
    }

    /// Record a visit to an accessible location.
    ///
    /// In order: marks every open visit-this-location objective across the
    /// active quests (completing quests that reach 100%), adds the location
    /// to the unlocked list, then rolls each potential item drop
    /// independently. `active_catalog` supplies the catalog definitions of
    /// the character's active quests; quests missing from it are skipped.
    ///
    /// Callers are expected to have checked [`Character::can_access`].
    pub fn visit_location(
        &mut self,
        location: &Location,
        active_catalog: &[Quest],
        now: DateTime<Utc>,
        roll: &mut dyn FnMut() -> f64,
    ) -> VisitOutcome {
        let mut outcome = VisitOutcome::default();

        // 1. Advance visit objectives on active quests
        let mut completed_ids = Vec::new();
        for entry in &mut self.active_quests {
            let Some(quest) = active_catalog.iter().find(|q| q.id == entry.quest_id) else {
                continue;
            };
            let mut changed = false;
            for (index, objective) in quest.objectives.iter().enumerate() {
                if index >= entry.objectives_done.len() {
                    break;
                }
                if objective.is_satisfied_by_visit(location.id) && !entry.objectives_done[index] {
                    entry.objectives_done[index] = true;
                    changed = true;
                }
            }
            if changed {
                entry.recompute_progress();
                if entry.progress_percent == 100 {
                    completed_ids.push(entry.quest_id);
                }
            }
        }
        for quest_id in completed_ids {
            let Some(quest) = active_catalog.iter().find(|q| q.id == quest_id) else {
                continue;
            };
            let rewards = self.finish_quest(quest, now, roll);
            outcome
                .quests_completed
                .push(QuestCompletion { quest_id, rewards });
        }

        // 2. Remember the location
        outcome.newly_unlocked = self.unlock_location(location.id);

        // 3. Roll item drops, one independent draw per potential item
        for drop in &location.available_items {
            let draw = roll();
            if draw * 100.0 < f64::from(drop.chance_percent) {
                self.grant_item(drop.item_id, 1, now);
                outcome.items_found.push(drop.item_id);
            }
        }

        outcome
    }

    // =========================================================================
    // Quests
    // =========================================================================

    /// The active entry for a quest, if the character is on it.
    pub fn active_quest(&self, quest_id: QuestId) -> Option<&ActiveQuest> {
        self.active_quests
            .iter()
            .find(|entry| entry.quest_id == quest_id)
    }

    /// Whether the quest appears in the completion log.
    pub fn has_completed_quest(&self, quest_id: QuestId) -> bool {
        self.completed_quests
            .iter()
            .any(|entry| entry.quest_id == quest_id)
    }

    /// Check whether the quest could be started right now, without
    /// mutating anything.
    ///
    /// State checks run before requirement checks: a quest that is both
    /// active and ineligible reports `AlreadyActive`.
    pub fn check_quest_start(&self, quest: &Quest) -> Result<(), QuestStartError> {
        if self.active_quest(quest.id).is_some() {
            return Err(QuestStartError::AlreadyActive);
        }
        if !quest.repeatable && self.has_completed_quest(quest.id) {
            return Err(QuestStartError::AlreadyCompleted);
        }
        if !quest.is_active {
            return Err(QuestStartError::NotEligible(
                "quest is not available".to_string(),
            ));
        }

        let requirements = &quest.requirements;
        if self.level < requirements.level {
            return Err(QuestStartError::NotEligible(format!(
                "requires level {}",
                requirements.level
            )));
        }
        if let Some((kind, minimum)) = requirements.skills.first_gap(&self.skills) {
            return Err(QuestStartError::NotEligible(format!(
                "requires {} {}",
                kind, minimum
            )));
        }
        if let Some(stack) = requirements
            .items
            .iter()
            .find(|stack| !self.has_item(stack.item_id, stack.quantity))
        {
            return Err(QuestStartError::NotEligible(format!(
                "missing required item {}",
                stack.item_id
            )));
        }
        if requirements
            .previous_quests
            .iter()
            .any(|prior| !self.has_completed_quest(*prior))
        {
            return Err(QuestStartError::NotEligible(
                "requires completing earlier quests".to_string(),
            ));
        }
        Ok(())
    }

    /// Start a quest, snapshotting its objective list.
    pub fn start_quest(&mut self, quest: &Quest, now: DateTime<Utc>) -> Result<(), QuestStartError> {
        self.check_quest_start(quest)?;
        self.active_quests.push(ActiveQuest::start(quest, now));
        Ok(())
    }

    /// Record one objective as done or not done, auto-completing the quest
    /// when progress reaches 100%.
    ///
    /// The index is validated against this character's snapshot, not the
    /// current catalog, so objectives added to the catalog after the quest
    /// was started are not addressable.
    pub fn report_objective(
        &mut self,
        quest: &Quest,
        objective_index: usize,
        done: bool,
        now: DateTime<Utc>,
        roll: &mut dyn FnMut() -> f64,
    ) -> Result<ObjectiveReport, QuestProgressError> {
        let entry = self
            .active_quests
            .iter_mut()
            .find(|entry| entry.quest_id == quest.id)
            .ok_or(QuestProgressError::QuestNotActive)?;

        if objective_index >= entry.objectives_done.len() {
            return Err(QuestProgressError::InvalidObjective {
                index: objective_index,
                objective_count: entry.objectives_done.len(),
            });
        }

        entry.objectives_done[objective_index] = done;
        entry.recompute_progress();
        let progress = entry.progress_percent;

        if progress == 100 {
            let rewards = self.finish_quest(quest, now, roll);
            return Ok(ObjectiveReport {
                progress_percent: 100,
                quest_completed: true,
                rewards: Some(rewards),
            });
        }

        Ok(ObjectiveReport {
            progress_percent: progress,
            quest_completed: false,
            rewards: None,
        })
    }

    /// Drop an active quest. Progress is discarded; nothing is paid out.
    /// The quest can be started again later, subject to the usual checks.
    pub fn abandon_quest(&mut self, quest_id: QuestId) -> Result<(), QuestProgressError> {
        let position = self
            .active_quests
            .iter()
            .position(|entry| entry.quest_id == quest_id)
            .ok_or(QuestProgressError::QuestNotActive)?;
        self.active_quests.remove(position);
        Ok(())
    }

    /// Move a quest from active to completed and pay out its rewards.
    /// Callers must ensure the quest is active.
    fn finish_quest(
        &mut self,
        quest: &Quest,
        now: DateTime<Utc>,
        roll: &mut dyn FnMut() -> f64,
    ) -> GrantedRewards {
        self.active_quests.retain(|entry| entry.quest_id != quest.id);
        let rewards = self.apply_rewards(&quest.rewards, now, roll);
        self.completed_quests.push(CompletedQuest {
            quest_id: quest.id,
            completed_at: now,
            rewards_granted: rewards.clone(),
        });
        rewards
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Check the event's level and skill gates, reporting the first unmet
    /// requirement.
    pub fn meets_event_requirements(&self, event: &Event) -> Result<(), String> {
        if self.level < event.requirements.level {
            return Err(format!("requires level {}", event.requirements.level));
        }
        if let Some((kind, minimum)) = event.requirements.skills.first_gap(&self.skills) {
            return Err(format!("requires {} {}", kind, minimum));
        }
        Ok(())
    }

    /// Whether the event is already in the participation log.
    pub fn has_participated(&self, event_id: EventId) -> bool {
        self.participated_events.contains(&event_id)
    }

    /// Append the event to the participation log. Repeat entries are
    /// allowed here; participation policy is enforced by the caller.
    pub fn record_event_participation(&mut self, event_id: EventId) {
        self.participated_events.push(event_id);
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Intermediate format for serialization that matches the wire format
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CharacterWireFormat {
    id: CharacterId,
    user_id: UserId,
    name: CharacterName,
    #[serde(default = "default_avatar")]
    avatar: String,
    /// Stored for read-model convenience; re-derived from experience on
    /// load so the invariant holds even for hand-edited documents.
    level: u32,
    experience: u64,
    points: u64,
    tokens: u64,
    skills: SkillSet,
    #[serde(default)]
    inventory: Vec<InventoryEntry>,
    #[serde(default)]
    loadout: Loadout,
    #[serde(default)]
    unlocked_locations: Vec<LocationId>,
    #[serde(default)]
    active_quests: Vec<ActiveQuest>,
    #[serde(default)]
    completed_quests: Vec<CompletedQuest>,
    #[serde(default)]
    participated_events: Vec<EventId>,
    created_at: DateTime<Utc>,
    last_played: DateTime<Utc>,
}

fn default_avatar() -> String {
    DEFAULT_AVATAR.to_string()
}

impl Serialize for Character {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = CharacterWireFormat {
            id: self.id,
            user_id: self.owner_user_id,
            name: self.name.clone(),
            avatar: self.avatar.clone(),
            level: self.level,
            experience: self.experience,
            points: self.points,
            tokens: self.tokens,
            skills: self.skills,
            inventory: self.inventory.clone(),
            loadout: self.loadout,
            unlocked_locations: self.unlocked_locations.clone(),
            active_quests: self.active_quests.clone(),
            completed_quests: self.completed_quests.clone(),
            participated_events: self.participated_events.clone(),
            created_at: self.created_at,
            last_played: self.last_played,
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Character {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = CharacterWireFormat::deserialize(deserializer)?;

        Ok(Character {
            id: wire.id,
            owner_user_id: wire.user_id,
            name: wire.name,
            avatar: wire.avatar,
            experience: wire.experience,
            level: level_for_experience(wire.experience),
            points: wire.points,
            tokens: wire.tokens,
            skills: wire.skills,
            inventory: wire.inventory,
            loadout: wire.loadout,
            unlocked_locations: wire.unlocked_locations,
            active_quests: wire.active_quests,
            completed_quests: wire.completed_quests,
            participated_events: wire.participated_events,
            created_at: wire.created_at,
            last_played: wire.last_played,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        EventType, ItemEffects, ItemType, LocationType, Objective, ObjectiveKind, QuestType,
        Rarity,
    };
    use crate::value_objects::{
        ItemName, LocationName, QuestRequirements, RewardItem, SkillKind, SkillRequirements,
        UnlockRequirements,
    };

    fn test_character() -> Character {
        let name = CharacterName::new("Ember Sage").unwrap();
        Character::new(UserId::new(), name, Utc::now())
    }

    fn test_item(item_type: ItemType) -> Item {
        Item::new(ItemName::new("Test Item").unwrap(), item_type)
    }

    /// Roll closure that never grants chance items.
    fn never() -> impl FnMut() -> f64 {
        || 0.999_999
    }

    /// Roll closure that always grants chance items (with chance >= 1).
    fn always() -> impl FnMut() -> f64 {
        || 0.0
    }

    mod constructor {
        use super::*;

        #[test]
        fn new_creates_level_one_character_with_defaults() {
            let owner = UserId::new();
            let name = CharacterName::new("Ash Warden").unwrap();
            let now = Utc::now();
            let character = Character::new(owner, name, now);

            assert_eq!(character.owner_user_id(), owner);
            assert_eq!(character.name().as_str(), "Ash Warden");
            assert_eq!(character.avatar(), DEFAULT_AVATAR);
            assert_eq!(character.level(), 1);
            assert_eq!(character.experience(), 0);
            assert_eq!(character.points(), 0);
            assert_eq!(character.tokens(), 0);
            assert!(character.inventory().is_empty());
            assert!(character.active_quests().is_empty());
            assert!(character.completed_quests().is_empty());
            assert!(character.participated_events().is_empty());
            assert_eq!(character.created_at(), now);
            assert_eq!(character.last_played(), now);
        }

        #[test]
        fn with_experience_rederives_level() {
            let character = test_character().with_experience(250);
            assert_eq!(character.level(), 3);
        }
    }

    mod progression {
        use super::*;

        #[test]
        fn add_experience_reports_level_up() {
            let mut character = test_character();
            let grant = character.add_experience(150);
            assert!(grant.leveled_up);
            assert_eq!(grant.new_level, 2);
            assert_eq!(character.experience(), 150);
        }

        #[test]
        fn add_experience_below_threshold_keeps_level() {
            let mut character = test_character();
            let grant = character.add_experience(99);
            assert!(!grant.leveled_up);
            assert_eq!(grant.new_level, 1);
        }

        #[test]
        fn spend_points_rejects_overdraft_without_deduction() {
            let mut character = test_character().with_points(30);
            let err = character.spend_points(50).unwrap_err();
            assert_eq!(
                err,
                InventoryError::InsufficientFunds {
                    available: 30,
                    required: 50
                }
            );
            assert_eq!(character.points(), 30);
        }

        #[test]
        fn spend_points_deducts_exact_balance() {
            let mut character = test_character().with_points(50);
            character.spend_points(50).unwrap();
            assert_eq!(character.points(), 0);
        }
    }

    mod rewards {
        use super::*;

        #[test]
        fn apply_rewards_grants_currencies_and_reports_level_up() {
            let mut character = test_character();
            let template = RewardTemplate::currency(120, 40, 5);
            let granted = character.apply_rewards(&template, Utc::now(), &mut never());

            assert_eq!(character.experience(), 120);
            assert_eq!(character.points(), 40);
            assert_eq!(character.tokens(), 5);
            assert!(granted.leveled_up);
            assert_eq!(granted.new_level, 2);
        }

        #[test]
        fn chance_items_follow_the_roll() {
            let item_id = ItemId::new();
            let mut template = RewardTemplate::default();
            template.items.push(RewardItem::with_chance(item_id, 50));

            let mut lucky = test_character();
            let granted = lucky.apply_rewards(&template, Utc::now(), &mut || 0.3);
            assert_eq!(granted.items.len(), 1);
            assert_eq!(lucky.item_quantity(item_id), 1);

            let mut unlucky = test_character();
            let granted = unlucky.apply_rewards(&template, Utc::now(), &mut || 0.7);
            assert!(granted.items.is_empty());
            assert_eq!(unlucky.item_quantity(item_id), 0);
        }

        #[test]
        fn zero_chance_item_never_drops_even_on_minimum_roll() {
            let item_id = ItemId::new();
            let mut template = RewardTemplate::default();
            template.items.push(RewardItem::with_chance(item_id, 0));

            let mut character = test_character();
            let granted = character.apply_rewards(&template, Utc::now(), &mut always());
            assert!(granted.items.is_empty());
        }

        #[test]
        fn already_unlocked_location_not_repeated_in_grant() {
            let location_id = LocationId::new();
            let mut character = test_character();
            character.unlock_location(location_id);

            let mut template = RewardTemplate::default();
            template.unlocked_locations.push(location_id);
            let granted = character.apply_rewards(&template, Utc::now(), &mut never());

            assert!(granted.unlocked_locations.is_empty());
            assert_eq!(character.unlocked_locations().len(), 1);
        }
    }

    mod inventory {
        use super::*;

        #[test]
        fn grant_item_merges_into_existing_stack() {
            let mut character = test_character();
            let item_id = ItemId::new();
            let now = Utc::now();

            character.grant_item(item_id, 2, now);
            character.grant_item(item_id, 3, now);

            assert_eq!(character.inventory().len(), 1);
            assert_eq!(character.item_quantity(item_id), 5);
        }

        #[test]
        fn use_item_decrements_and_applies_effects() {
            let mut character = test_character();
            let item = test_item(ItemType::Consumable)
                .with_effects(ItemEffects::skill(SkillKind::AromaExpertise, 2));
            character.grant_item(item.id, 2, Utc::now());

            let remaining = character.use_item(&item).unwrap();

            assert_eq!(remaining, 1);
            assert_eq!(character.skills().rating(SkillKind::AromaExpertise), 3);
        }

        #[test]
        fn use_item_fails_when_not_held() {
            let mut character = test_character();
            let item = test_item(ItemType::Consumable);
            let err = character.use_item(&item).unwrap_err();
            assert_eq!(err, InventoryError::ItemNotHeld(item.id));
        }

        #[test]
        fn using_last_unit_removes_stack_and_unequips() {
            let mut character = test_character();
            let item = test_item(ItemType::Cigar);
            character.grant_item(item.id, 1, Utc::now());
            character.equip(&item).unwrap();

            let remaining = character.use_item(&item).unwrap();

            assert_eq!(remaining, 0);
            assert!(character.inventory().is_empty());
            assert!(!character.is_equipped(item.id));
        }

        #[test]
        fn equip_requires_holding_the_item() {
            let mut character = test_character();
            let item = test_item(ItemType::Cigar);
            let err = character.equip(&item).unwrap_err();
            assert_eq!(err, InventoryError::ItemNotHeld(item.id));
        }

        #[test]
        fn equip_rejects_unequippable_types() {
            let mut character = test_character();
            let item = test_item(ItemType::Collectible);
            character.grant_item(item.id, 1, Utc::now());
            let err = character.equip(&item).unwrap_err();
            assert_eq!(err, InventoryError::NotEquippable(item.id));
        }

        #[test]
        fn equip_replaces_slot_occupant_and_keeps_it_in_inventory() {
            let mut character = test_character();
            let first = test_item(ItemType::Cigar);
            let second = test_item(ItemType::Cigar);
            let now = Utc::now();
            character.grant_item(first.id, 1, now);
            character.grant_item(second.id, 1, now);

            assert_eq!(character.equip(&first).unwrap(), None);
            let replaced = character.equip(&second).unwrap();

            assert_eq!(replaced, Some(first.id));
            assert!(character.is_equipped(second.id));
            assert!(!character.is_equipped(first.id));
            assert_eq!(character.item_quantity(first.id), 1);
        }

        #[test]
        fn items_in_different_slots_coexist() {
            let mut character = test_character();
            let cigar = test_item(ItemType::Cigar);
            let flavor = test_item(ItemType::HookahFlavor);
            let now = Utc::now();
            character.grant_item(cigar.id, 1, now);
            character.grant_item(flavor.id, 1, now);

            character.equip(&cigar).unwrap();
            character.equip(&flavor).unwrap();

            assert!(character.is_equipped(cigar.id));
            assert!(character.is_equipped(flavor.id));
        }

        #[test]
        fn unequip_fails_for_unequipped_item() {
            let mut character = test_character();
            let item_id = ItemId::new();
            let err = character.unequip(item_id).unwrap_err();
            assert_eq!(err, InventoryError::NotEquipped(item_id));
        }
    }

    mod quests {
        use super::*;

        fn two_step_quest() -> Quest {
            Quest::new("Test Quest", QuestType::Side)
                .with_objective(Objective::new("step one", ObjectiveKind::Custom))
                .with_objective(Objective::new("step two", ObjectiveKind::Custom))
                .with_rewards(RewardTemplate::currency(50, 10, 0))
        }

        #[test]
        fn start_snapshots_objectives() {
            let mut character = test_character();
            let quest = two_step_quest();
            character.start_quest(&quest, Utc::now()).unwrap();

            let entry = character.active_quest(quest.id).unwrap();
            assert_eq!(entry.objectives_done(), &[false, false]);
            assert_eq!(entry.progress_percent(), 0);
        }

        #[test]
        fn start_fails_when_already_active() {
            let mut character = test_character();
            let quest = two_step_quest();
            character.start_quest(&quest, Utc::now()).unwrap();
            let err = character.start_quest(&quest, Utc::now()).unwrap_err();
            assert_eq!(err, QuestStartError::AlreadyActive);
        }

        #[test]
        fn start_fails_below_required_level() {
            let mut character = test_character();
            let quest = two_step_quest().with_requirements(QuestRequirements::min_level(5));
            let err = character.start_quest(&quest, Utc::now()).unwrap_err();
            assert!(matches!(err, QuestStartError::NotEligible(reason) if reason.contains("level 5")));
        }

        #[test]
        fn start_fails_on_missing_skill() {
            let mut character = test_character();
            let mut quest = two_step_quest();
            quest.requirements.skills = SkillRequirements::single(SkillKind::MixingMastery, 10);
            let err = character.start_quest(&quest, Utc::now()).unwrap_err();
            assert!(matches!(err, QuestStartError::NotEligible(reason) if reason.contains("mixingMastery")));
        }

        #[test]
        fn start_fails_on_missing_prerequisite_quest() {
            let mut character = test_character();
            let mut quest = two_step_quest();
            quest.requirements.previous_quests.push(QuestId::new());
            let err = character.start_quest(&quest, Utc::now()).unwrap_err();
            assert!(matches!(err, QuestStartError::NotEligible(_)));
        }

        #[test]
        fn start_fails_on_inactive_quest() {
            let mut character = test_character();
            let mut quest = two_step_quest();
            quest.is_active = false;
            let err = character.start_quest(&quest, Utc::now()).unwrap_err();
            assert!(matches!(err, QuestStartError::NotEligible(_)));
        }

        #[test]
        fn completed_one_shot_quest_cannot_restart() {
            let mut character = test_character();
            let quest = Quest::new("One Shot", QuestType::Side)
                .with_objective(Objective::new("only step", ObjectiveKind::Custom));
            character.start_quest(&quest, Utc::now()).unwrap();
            character
                .report_objective(&quest, 0, true, Utc::now(), &mut never())
                .unwrap();

            let err = character.start_quest(&quest, Utc::now()).unwrap_err();
            assert_eq!(err, QuestStartError::AlreadyCompleted);
        }

        #[test]
        fn completed_repeatable_quest_can_restart() {
            let mut character = test_character();
            let quest = Quest::new("Morning Rounds", QuestType::Daily)
                .with_objective(Objective::new("only step", ObjectiveKind::Custom));
            character.start_quest(&quest, Utc::now()).unwrap();
            character
                .report_objective(&quest, 0, true, Utc::now(), &mut never())
                .unwrap();

            character.start_quest(&quest, Utc::now()).unwrap();
            assert!(character.active_quest(quest.id).is_some());
        }

        #[test]
        fn already_active_wins_over_requirement_failures() {
            let mut character = test_character();
            let mut quest = two_step_quest();
            character.start_quest(&quest, Utc::now()).unwrap();

            // Requirements tightened after the quest was started
            quest.requirements.level = 99;
            let err = character.check_quest_start(&quest).unwrap_err();
            assert_eq!(err, QuestStartError::AlreadyActive);
        }

        #[test]
        fn progress_is_floored() {
            let mut character = test_character();
            let quest = Quest::new("Three Steps", QuestType::Side)
                .with_objective(Objective::new("a", ObjectiveKind::Custom))
                .with_objective(Objective::new("b", ObjectiveKind::Custom))
                .with_objective(Objective::new("c", ObjectiveKind::Custom));
            character.start_quest(&quest, Utc::now()).unwrap();

            let report = character
                .report_objective(&quest, 0, true, Utc::now(), &mut never())
                .unwrap();
            assert_eq!(report.progress_percent, 33);
            assert!(!report.quest_completed);
        }

        #[test]
        fn completing_final_objective_pays_rewards_and_moves_quest() {
            let mut character = test_character();
            let quest = two_step_quest();
            let now = Utc::now();
            character.start_quest(&quest, now).unwrap();

            character
                .report_objective(&quest, 0, true, now, &mut never())
                .unwrap();
            let report = character
                .report_objective(&quest, 1, true, now, &mut never())
                .unwrap();

            assert!(report.quest_completed);
            let rewards = report.rewards.unwrap();
            assert_eq!(rewards.experience, 50);
            assert!(character.active_quest(quest.id).is_none());
            assert!(character.has_completed_quest(quest.id));
            assert_eq!(character.experience(), 50);
            assert_eq!(character.points(), 10);
        }

        #[test]
        fn unmarking_an_objective_lowers_progress() {
            let mut character = test_character();
            let quest = two_step_quest();
            character.start_quest(&quest, Utc::now()).unwrap();
            character
                .report_objective(&quest, 0, true, Utc::now(), &mut never())
                .unwrap();

            let report = character
                .report_objective(&quest, 0, false, Utc::now(), &mut never())
                .unwrap();
            assert_eq!(report.progress_percent, 0);
        }

        #[test]
        fn objective_index_validated_against_snapshot() {
            let mut character = test_character();
            let mut quest = two_step_quest();
            character.start_quest(&quest, Utc::now()).unwrap();

            // Catalog grows after the snapshot was taken
            quest = quest.with_objective(Objective::new(
                "late addition",
                ObjectiveKind::Custom,
            ));
            let err = character
                .report_objective(&quest, 2, true, Utc::now(), &mut never())
                .unwrap_err();
            assert_eq!(
                err,
                QuestProgressError::InvalidObjective {
                    index: 2,
                    objective_count: 2
                }
            );
        }

        #[test]
        fn report_fails_when_quest_not_active() {
            let mut character = test_character();
            let quest = two_step_quest();
            let err = character
                .report_objective(&quest, 0, true, Utc::now(), &mut never())
                .unwrap_err();
            assert_eq!(err, QuestProgressError::QuestNotActive);
        }

        #[test]
        fn zero_objective_quest_never_auto_completes() {
            let mut character = test_character();
            let quest = Quest::new("Empty", QuestType::Side);
            character.start_quest(&quest, Utc::now()).unwrap();

            let entry = character.active_quest(quest.id).unwrap();
            assert_eq!(entry.progress_percent(), 0);

            let err = character
                .report_objective(&quest, 0, true, Utc::now(), &mut never())
                .unwrap_err();
            assert!(matches!(err, QuestProgressError::InvalidObjective { .. }));
            assert!(character.active_quest(quest.id).is_some());
            assert!(!character.has_completed_quest(quest.id));
        }

        #[test]
        fn abandon_discards_progress_without_rewards() {
            let mut character = test_character();
            let quest = two_step_quest();
            character.start_quest(&quest, Utc::now()).unwrap();
            character
                .report_objective(&quest, 0, true, Utc::now(), &mut never())
                .unwrap();

            character.abandon_quest(quest.id).unwrap();

            assert!(character.active_quest(quest.id).is_none());
            assert!(!character.has_completed_quest(quest.id));
            assert_eq!(character.experience(), 0);

            // Restart begins from scratch
            character.start_quest(&quest, Utc::now()).unwrap();
            assert_eq!(
                character.active_quest(quest.id).unwrap().progress_percent(),
                0
            );
        }

        #[test]
        fn abandon_fails_when_not_active() {
            let mut character = test_character();
            let err = character.abandon_quest(QuestId::new()).unwrap_err();
            assert_eq!(err, QuestProgressError::QuestNotActive);
        }
    }

    mod locations {
        use super::*;

        fn open_location() -> Location {
            Location::new(
                LocationName::new("The Ember Hall").unwrap(),
                LocationType::Lounge,
            )
        }

        fn locked_location(level: u32) -> Location {
            Location::new(
                LocationName::new("Velvet Cellar").unwrap(),
                LocationType::Special,
            )
            .locked(UnlockRequirements::min_level(level))
        }

        #[test]
        fn open_location_is_accessible() {
            let character = test_character();
            assert!(character.can_access(&open_location()));
        }

        #[test]
        fn inactive_location_is_closed_to_everyone() {
            let character = test_character().with_experience(10_000);
            let mut location = open_location();
            location.is_active = false;
            assert!(!character.can_access(&location));
        }

        #[test]
        fn locked_location_blocks_low_level_characters() {
            let character = test_character();
            assert!(!character.can_access(&locked_location(5)));
        }

        #[test]
        fn level_clause_opens_locked_location() {
            let character = test_character().with_experience(400); // level 5
            assert!(character.can_access(&locked_location(5)));
        }

        #[test]
        fn explicit_unlock_opens_locked_location() {
            let mut character = test_character();
            let location = locked_location(50);
            character.unlock_location(location.id);
            assert!(character.can_access(&location));
        }

        #[test]
        fn required_quest_must_be_completed() {
            let mut character = test_character();
            let key_quest = Quest::new("Key Quest", QuestType::Side)
                .with_objective(Objective::new("step", ObjectiveKind::Custom));
            let mut location = locked_location(1);
            location.unlock_requirements.quests.push(key_quest.id);
            assert!(!character.can_access(&location));

            character.start_quest(&key_quest, Utc::now()).unwrap();
            character
                .report_objective(&key_quest, 0, true, Utc::now(), &mut never())
                .unwrap();
            assert!(character.can_access(&location));
        }

        #[test]
        fn all_required_items_must_be_held() {
            let mut character = test_character();
            let key_a = ItemId::new();
            let key_b = ItemId::new();
            let mut location = locked_location(1);
            location.unlock_requirements.items = vec![
                ItemStack::new(key_a, 1),
                ItemStack::new(key_b, 1),
            ];

            character.grant_item(key_a, 1, Utc::now());
            assert!(!character.can_access(&location));

            character.grant_item(key_b, 1, Utc::now());
            assert!(character.can_access(&location));
        }

        #[test]
        fn every_requirement_must_hold_at_once() {
            let mut character = test_character();
            let key = ItemId::new();
            let mut location = locked_location(5);
            location.unlock_requirements.items = vec![ItemStack::new(key, 1)];

            // Item alone is not enough below the level floor.
            character.grant_item(key, 1, Utc::now());
            assert!(!character.can_access(&location));

            let leveled = character.clone().with_experience(400); // level 5
            assert!(leveled.can_access(&location));
        }

        #[test]
        fn visit_unlocks_and_rolls_drops_independently() {
            let mut character = test_character();
            let common = ItemId::new();
            let rare = ItemId::new();
            let location = open_location()
                .with_drop(common, 100)
                .with_drop(rare, 10);

            // First draw grants (any roll beats chance 100), second misses
            let mut draws = vec![0.5, 0.5].into_iter();
            let mut roll = move || draws.next().unwrap_or(0.999);
            let outcome = character.visit_location(&location, &[], Utc::now(), &mut roll);

            assert!(outcome.newly_unlocked);
            assert_eq!(outcome.items_found, vec![common]);
            assert_eq!(character.item_quantity(common), 1);
            assert_eq!(character.item_quantity(rare), 0);
        }

        #[test]
        fn revisit_does_not_unlock_again() {
            let mut character = test_character();
            let location = open_location();
            character.visit_location(&location, &[], Utc::now(), &mut never());
            let outcome = character.visit_location(&location, &[], Utc::now(), &mut never());
            assert!(!outcome.newly_unlocked);
            assert_eq!(character.unlocked_locations().len(), 1);
        }

        #[test]
        fn visit_completes_matching_visit_objectives() {
            let mut character = test_character();
            let location = open_location();
            let quest = Quest::new("Pay a Visit", QuestType::Side)
                .with_objective(Objective::visit("stop by", location.id))
                .with_rewards(RewardTemplate::currency(30, 0, 0));
            character.start_quest(&quest, Utc::now()).unwrap();

            let outcome = character.visit_location(
                &location,
                std::slice::from_ref(&quest),
                Utc::now(),
                &mut never(),
            );

            assert_eq!(outcome.quests_completed.len(), 1);
            assert_eq!(outcome.quests_completed[0].quest_id, quest.id);
            assert!(character.has_completed_quest(quest.id));
            assert_eq!(character.experience(), 30);
        }

        #[test]
        fn visit_advances_but_does_not_complete_partial_quests() {
            let mut character = test_character();
            let location = open_location();
            let quest = Quest::new("Two Stops", QuestType::Side)
                .with_objective(Objective::visit("first stop", location.id))
                .with_objective(Objective::visit("second stop", LocationId::new()));
            character.start_quest(&quest, Utc::now()).unwrap();

            let outcome = character.visit_location(
                &location,
                std::slice::from_ref(&quest),
                Utc::now(),
                &mut never(),
            );

            assert!(outcome.quests_completed.is_empty());
            let entry = character.active_quest(quest.id).unwrap();
            assert_eq!(entry.progress_percent(), 50);
            assert_eq!(entry.objectives_done(), &[true, false]);
        }

        #[test]
        fn visit_ignores_already_done_objectives() {
            let mut character = test_character();
            let location = open_location();
            let quest = Quest::new("Repeat Visit", QuestType::Side)
                .with_objective(Objective::visit("stop by", location.id))
                .with_objective(Objective::new("other", ObjectiveKind::Custom));
            character.start_quest(&quest, Utc::now()).unwrap();

            character.visit_location(&location, std::slice::from_ref(&quest), Utc::now(), &mut never());
            let outcome = character.visit_location(
                &location,
                std::slice::from_ref(&quest),
                Utc::now(),
                &mut never(),
            );

            assert!(outcome.quests_completed.is_empty());
            let entry = character.active_quest(quest.id).unwrap();
            assert_eq!(entry.progress_percent(), 50);
        }
    }

    mod events {
        use super::*;
        use crate::value_objects::EventRequirements;

        fn test_event() -> Event {
            let now = Utc::now();
            Event::new(
                "Harvest Tasting",
                EventType::Seasonal,
                now - chrono::Duration::hours(1),
                now + chrono::Duration::hours(1),
            )
        }

        #[test]
        fn requirements_checked_with_reason() {
            let character = test_character();
            let mut event = test_event();
            event.requirements = EventRequirements {
                level: 3,
                skills: SkillRequirements::default(),
            };
            let reason = character.meets_event_requirements(&event).unwrap_err();
            assert!(reason.contains("level 3"));
        }

        #[test]
        fn participation_log_grows() {
            let mut character = test_character();
            let event = test_event();
            assert!(!character.has_participated(event.id));
            character.record_event_participation(event.id);
            assert!(character.has_participated(event.id));
        }
    }

    mod serde_format {
        use super::*;

        #[test]
        fn serialize_deserialize_roundtrip() {
            let mut character = test_character().with_points(75).with_experience(150);
            let item = test_item(ItemType::Cigar).with_rarity(Rarity::Rare);
            character.grant_item(item.id, 2, Utc::now());
            character.equip(&item).unwrap();
            let quest = Quest::new("Round Trip", QuestType::Side)
                .with_objective(Objective::new("step", ObjectiveKind::Custom));
            character.start_quest(&quest, Utc::now()).unwrap();

            let json = serde_json::to_string(&character).unwrap();
            let loaded: Character = serde_json::from_str(&json).unwrap();

            assert_eq!(loaded.id(), character.id());
            assert_eq!(loaded.level(), 2);
            assert_eq!(loaded.points(), 75);
            assert_eq!(loaded.item_quantity(item.id), 2);
            assert!(loaded.is_equipped(item.id));
            assert!(loaded.active_quest(quest.id).is_some());
        }

        #[test]
        fn serialize_produces_camel_case() {
            let character = test_character();
            let json = serde_json::to_string(&character).unwrap();

            assert!(json.contains("userId"));
            assert!(json.contains("unlockedLocations"));
            assert!(json.contains("activeQuests"));
            assert!(json.contains("completedQuests"));
            assert!(json.contains("participatedEvents"));
            assert!(json.contains("lastPlayed"));
        }

        #[test]
        fn level_is_rederived_from_experience_on_load() {
            let character = test_character().with_experience(250);
            let mut value = serde_json::to_value(&character).unwrap();
            // Simulate a hand-edited document with an inconsistent level
            value["level"] = serde_json::json!(99);

            let loaded: Character = serde_json::from_value(value).unwrap();
            assert_eq!(loaded.level(), 3);
        }

        #[test]
        fn missing_collections_default_to_empty() {
            let character = test_character();
            let mut value = serde_json::to_value(&character).unwrap();
            let object = value.as_object_mut().unwrap();
            object.remove("participatedEvents");
            object.remove("loadout");
            object.remove("avatar");

            let loaded: Character = serde_json::from_value(value).unwrap();
            assert!(loaded.participated_events().is_empty());
            assert_eq!(loaded.loadout(), &Loadout::default());
            assert_eq!(loaded.avatar(), DEFAULT_AVATAR);
        }
    }
}
