//! Input and result types for character use cases.

use emberhall_domain::Character;

/// Input for creating a character.
#[derive(Debug, Clone)]
pub struct CreateCharacterInput {
    pub name: String,
    /// Omitted means the default avatar.
    pub avatar: Option<String>,
}

/// Input for editing name or avatar. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub avatar: Option<String>,
}

/// Outcome of an experience grant.
#[derive(Debug, Clone)]
pub struct GrantExperienceResult {
    pub character: Character,
    pub leveled_up: bool,
    pub new_level: u32,
    /// Where the grant came from, for the activity log.
    pub source: String,
}

/// Outcome of handing an item to a character.
#[derive(Debug, Clone)]
pub struct GrantItemResult {
    pub character: Character,
    pub item_name: String,
    pub quantity: u32,
    /// Stack size after the grant.
    pub total_held: u32,
}
