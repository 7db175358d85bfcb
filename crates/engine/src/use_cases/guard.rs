//! Actor identity and ownership checks.
//!
//! Every mutating use case runs behind the same rule: a player may only act
//! on a character they own, an admin may act on any character.

use serde::{Deserialize, Serialize};

use emberhall_domain::{Character, UserId};

/// Authorization role carried by a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Player,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Player => write!(f, "player"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "player" => Ok(Role::Player),
            "admin" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

/// The authenticated caller behind a use case invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: UserId,
    pub role: Role,
}

impl Actor {
    pub fn player(user_id: UserId) -> Self {
        Self {
            user_id,
            role: Role::Player,
        }
    }

    pub fn admin(user_id: UserId) -> Self {
        Self {
            user_id,
            role: Role::Admin,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// Whether `actor` may read or mutate `character`.
pub fn can_act_on(actor: &Actor, character: &Character) -> bool {
    actor.is_admin() || character.owner_user_id() == actor.user_id
}
