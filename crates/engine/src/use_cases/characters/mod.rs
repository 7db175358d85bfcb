//! Character use cases.
//!
//! Account-facing operations: registration, profile edits, progression
//! grants.

mod create_character;
mod error;
mod get_character;
mod grant_experience;
mod grant_item;
mod list_characters;
mod types;
mod update_profile;

pub use create_character::CreateCharacter;
pub use error::CharacterError;
pub use get_character::GetCharacter;
pub use grant_experience::GrantExperience;
pub use grant_item::GrantItem;
pub use list_characters::ListCharacters;
pub use types::{
    CreateCharacterInput, GrantExperienceResult, GrantItemResult, UpdateProfileInput,
};
pub use update_profile::UpdateProfile;

use std::sync::Arc;

/// Container for character use cases.
pub struct CharacterUseCases {
    pub create: Arc<CreateCharacter>,
    pub get: Arc<GetCharacter>,
    pub update_profile: Arc<UpdateProfile>,
    pub list: Arc<ListCharacters>,
    pub grant_experience: Arc<GrantExperience>,
    pub grant_item: Arc<GrantItem>,
}

impl CharacterUseCases {
    pub fn new(
        create: Arc<CreateCharacter>,
        get: Arc<GetCharacter>,
        update_profile: Arc<UpdateProfile>,
        list: Arc<ListCharacters>,
        grant_experience: Arc<GrantExperience>,
        grant_item: Arc<GrantItem>,
    ) -> Self {
        Self {
            create,
            get,
            update_profile,
            list,
            grant_experience,
            grant_item,
        }
    }
}
