//! Engine integration tests.
//!
//! These drive complete gameplay flows through [`App`](crate::app::App)
//! wired over the in-memory store, with the clock pinned to the fixture
//! instant and the RNG scripted per test. No external services are needed.


use emberhall_domain::{Character, UserId};

use crate::app::App;
use crate::use_cases::characters::CreateCharacterInput;
use crate::use_cases::guard::Actor;

/// Register a fresh player account and its character.
async fn new_player(app: &App, name: &str) -> (Actor, Character) {
    let actor = Actor::player(UserId::new());
    let character = app
        .use_cases
        .characters
        .create
        .execute(
            &actor,
            CreateCharacterInput {
                name: name.to_string(),
                avatar: None,
            },
        )
        .await
        .expect("character creation should succeed");
    (actor, character)
}
