//! Result types for item use cases.

use emberhall_domain::{Character, EquipSlot, ItemId};

/// Outcome of a store purchase.
#[derive(Debug, Clone)]
pub struct PurchaseResult {
    pub character: Character,
    pub item_name: String,
    /// Points deducted at the caller-resolved price.
    pub spent_points: u64,
}

/// Outcome of consuming one unit of an item.
#[derive(Debug, Clone)]
pub struct UseItemResult {
    pub character: Character,
    pub item_name: String,
    /// Units left in the stack after this use.
    pub remaining: u32,
}

/// Outcome of equipping an item.
#[derive(Debug, Clone)]
pub struct EquipResult {
    pub character: Character,
    pub slot: EquipSlot,
    /// Item displaced from the slot, if it was occupied.
    pub replaced: Option<ItemId>,
}
