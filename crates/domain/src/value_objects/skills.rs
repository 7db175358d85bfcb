//! Character skill ratings
//!
//! Every character tracks four fixed skill tracks. Ratings are clamped to
//! [1, 100]; there is no skill removal or addition at runtime, so the set is
//! a plain struct rather than a map.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Lowest possible skill rating.
pub const SKILL_MIN: u8 = 1;
/// Highest possible skill rating.
pub const SKILL_MAX: u8 = 100;

/// The four skill tracks a character progresses along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillKind {
    TobaccoKnowledge,
    AromaExpertise,
    MixingMastery,
    CigarConnoisseur,
}

impl SkillKind {
    /// All skill kinds, in display order.
    pub const ALL: [SkillKind; 4] = [
        SkillKind::TobaccoKnowledge,
        SkillKind::AromaExpertise,
        SkillKind::MixingMastery,
        SkillKind::CigarConnoisseur,
    ];

    /// Wire string for this skill kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillKind::TobaccoKnowledge => "tobaccoKnowledge",
            SkillKind::AromaExpertise => "aromaExpertise",
            SkillKind::MixingMastery => "mixingMastery",
            SkillKind::CigarConnoisseur => "cigarConnoisseur",
        }
    }
}

impl fmt::Display for SkillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SkillKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tobaccoKnowledge" => Ok(SkillKind::TobaccoKnowledge),
            "aromaExpertise" => Ok(SkillKind::AromaExpertise),
            "mixingMastery" => Ok(SkillKind::MixingMastery),
            "cigarConnoisseur" => Ok(SkillKind::CigarConnoisseur),
            other => Err(DomainError::parse(format!("Unknown skill kind: {}", other))),
        }
    }
}

/// A character's current rating on each skill track.
///
/// Ratings stay within [`SKILL_MIN`]..=[`SKILL_MAX`] through every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSet {
    tobacco_knowledge: u8,
    aroma_expertise: u8,
    mixing_mastery: u8,
    cigar_connoisseur: u8,
}

impl SkillSet {
    /// Creates a fresh skill set with every rating at the minimum.
    pub fn new() -> Self {
        Self {
            tobacco_knowledge: SKILL_MIN,
            aroma_expertise: SKILL_MIN,
            mixing_mastery: SKILL_MIN,
            cigar_connoisseur: SKILL_MIN,
        }
    }

    /// Creates a skill set with explicit ratings, clamping each to the
    /// valid range (used when loading from storage).
    pub fn with_ratings(
        tobacco_knowledge: u8,
        aroma_expertise: u8,
        mixing_mastery: u8,
        cigar_connoisseur: u8,
    ) -> Self {
        Self {
            tobacco_knowledge: clamp_rating(tobacco_knowledge),
            aroma_expertise: clamp_rating(aroma_expertise),
            mixing_mastery: clamp_rating(mixing_mastery),
            cigar_connoisseur: clamp_rating(cigar_connoisseur),
        }
    }

    /// Current rating for one skill track.
    pub fn rating(&self, kind: SkillKind) -> u8 {
        match kind {
            SkillKind::TobaccoKnowledge => self.tobacco_knowledge,
            SkillKind::AromaExpertise => self.aroma_expertise,
            SkillKind::MixingMastery => self.mixing_mastery,
            SkillKind::CigarConnoisseur => self.cigar_connoisseur,
        }
    }

    /// Adjusts one rating by a signed delta, clamping the outcome to the
    /// valid range. Returns the new rating.
    pub fn adjust(&mut self, kind: SkillKind, delta: i16) -> u8 {
        let slot = match kind {
            SkillKind::TobaccoKnowledge => &mut self.tobacco_knowledge,
            SkillKind::AromaExpertise => &mut self.aroma_expertise,
            SkillKind::MixingMastery => &mut self.mixing_mastery,
            SkillKind::CigarConnoisseur => &mut self.cigar_connoisseur,
        };
        let adjusted = (*slot as i16).saturating_add(delta);
        *slot = adjusted.clamp(SKILL_MIN as i16, SKILL_MAX as i16) as u8;
        *slot
    }

    /// Whether every rating meets the given set of minimums.
    pub fn meets(&self, required: &SkillRequirements) -> bool {
        required.first_gap(self).is_none()
    }
}

impl Default for SkillSet {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_rating(value: u8) -> u8 {
    value.clamp(SKILL_MIN, SKILL_MAX)
}

/// Minimum skill ratings gating a quest or event.
///
/// A zero means "no requirement" for that track, since live ratings never
/// drop below [`SKILL_MIN`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillRequirements {
    pub tobacco_knowledge: u8,
    pub aroma_expertise: u8,
    pub mixing_mastery: u8,
    pub cigar_connoisseur: u8,
}

impl SkillRequirements {
    /// A requirement on a single skill track, other tracks unconstrained.
    pub fn single(kind: SkillKind, minimum: u8) -> Self {
        let mut requirements = Self::default();
        match kind {
            SkillKind::TobaccoKnowledge => requirements.tobacco_knowledge = minimum,
            SkillKind::AromaExpertise => requirements.aroma_expertise = minimum,
            SkillKind::MixingMastery => requirements.mixing_mastery = minimum,
            SkillKind::CigarConnoisseur => requirements.cigar_connoisseur = minimum,
        }
        requirements
    }

    /// Required minimum for one skill track.
    pub fn minimum(&self, kind: SkillKind) -> u8 {
        match kind {
            SkillKind::TobaccoKnowledge => self.tobacco_knowledge,
            SkillKind::AromaExpertise => self.aroma_expertise,
            SkillKind::MixingMastery => self.mixing_mastery,
            SkillKind::CigarConnoisseur => self.cigar_connoisseur,
        }
    }

    /// First skill track whose minimum the given ratings fail, with the
    /// required value. `None` means all requirements are met.
    pub fn first_gap(&self, skills: &SkillSet) -> Option<(SkillKind, u8)> {
        SkillKind::ALL
            .into_iter()
            .map(|kind| (kind, self.minimum(kind)))
            .find(|(kind, minimum)| skills.rating(*kind) < *minimum)
    }
}
