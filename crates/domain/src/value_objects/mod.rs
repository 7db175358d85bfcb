//! Value objects - Immutable objects defined by their attributes

mod names;
mod requirements;
mod rewards;
mod skills;

pub use names::{CharacterName, ItemName, LocationName};
pub use requirements::{EventRequirements, QuestRequirements, UnlockRequirements};
pub use rewards::{GrantedRewards, ItemStack, RewardItem, RewardTemplate};
pub use skills::{SkillKind, SkillRequirements, SkillSet, SKILL_MAX, SKILL_MIN};
