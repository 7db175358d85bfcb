//! Level progression math
//!
//! Level is derived from lifetime experience and is never stored as an
//! independent counter: every 100 experience points is one level, starting
//! at level 1 with zero experience.

/// Experience points required per character level.
pub const EXPERIENCE_PER_LEVEL: u64 = 100;

/// Derives the character level for a lifetime experience total.
///
/// Integer division, so partial progress toward the next level does not
/// round up: 0-99 XP is level 1, 100-199 XP is level 2, and so on.
pub fn level_for_experience(experience: u64) -> u32 {
    1 + (experience / EXPERIENCE_PER_LEVEL) as u32
}
