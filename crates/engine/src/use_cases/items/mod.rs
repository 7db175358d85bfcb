//! Item use cases: store purchases, consumption, and the loadout.

mod equip_item;
mod error;
mod purchase_item;
mod types;
mod unequip_item;
mod use_item;

pub use equip_item::EquipItem;
pub use error::ItemError;
pub use purchase_item::PurchaseItem;
pub use types::{EquipResult, PurchaseResult, UseItemResult};
pub use unequip_item::UnequipItem;
pub use use_item::UseItem;

use std::sync::Arc;

/// Container for item use cases.
pub struct ItemUseCases {
    pub purchase: Arc<PurchaseItem>,
    pub use_item: Arc<UseItem>,
    pub equip: Arc<EquipItem>,
    pub unequip: Arc<UnequipItem>,
}

impl ItemUseCases {
    pub fn new(
        purchase: Arc<PurchaseItem>,
        use_item: Arc<UseItem>,
        equip: Arc<EquipItem>,
        unequip: Arc<UnequipItem>,
    ) -> Self {
        Self {
            purchase,
            use_item,
            equip,
            unequip,
        }
    }
}
