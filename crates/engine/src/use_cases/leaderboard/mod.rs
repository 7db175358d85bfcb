//! Leaderboard use case.
//!
//! Rankings are public read models; there is no authorization step. The
//! ordering itself lives in the repository so a database backend can rank
//! with an indexed query instead of loading every character.

use std::sync::Arc;

use emberhall_domain::{Character, CharacterId};

use crate::infrastructure::ports::{CharacterRepo, LeaderboardMetric, RepoError};

/// Rows returned when the caller does not give a limit.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 20;
/// Hard cap on requested leaderboard size.
pub const MAX_LEADERBOARD_LIMIT: usize = 100;

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// 1-based position.
    pub rank: u32,
    pub character_id: CharacterId,
    pub name: String,
    pub level: u32,
    /// The ranked figure, in the requested metric.
    pub value: u64,
}

/// Get leaderboard use case.
pub struct GetLeaderboard {
    characters: Arc<dyn CharacterRepo>,
}

impl GetLeaderboard {
    pub fn new(characters: Arc<dyn CharacterRepo>) -> Self {
        Self { characters }
    }

    /// Execute the ranking query.
    pub async fn execute(
        &self,
        metric: LeaderboardMetric,
        limit: Option<usize>,
    ) -> Result<Vec<LeaderboardEntry>, RepoError> {
        let limit = limit
            .unwrap_or(DEFAULT_LEADERBOARD_LIMIT)
            .min(MAX_LEADERBOARD_LIMIT);

        let ranked = self.characters.list_top(metric, limit).await?;
        let entries = ranked
            .into_iter()
            .enumerate()
            .map(|(index, character)| LeaderboardEntry {
                rank: (index + 1) as u32,
                character_id: character.id(),
                name: character.name().as_str().to_string(),
                level: character.level(),
                value: metric_value(&character, metric),
            })
            .collect();

        Ok(entries)
    }
}

fn metric_value(character: &Character, metric: LeaderboardMetric) -> u64 {
    match metric {
        LeaderboardMetric::Experience => character.experience(),
        LeaderboardMetric::Points => character.points(),
        LeaderboardMetric::Tokens => character.tokens(),
        LeaderboardMetric::Level => u64::from(character.level()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockCharacterRepo;
    use chrono::Utc;
    use emberhall_domain::{CharacterName, UserId};

    fn character_with_experience(name: &str, experience: u64) -> Character {
        Character::new(
            UserId::new(),
            CharacterName::new(name).unwrap(),
            Utc::now(),
        )
        .with_experience(experience)
    }

    #[tokio::test]
    async fn entries_are_ranked_from_one_in_repo_order() {
        let ranked = vec![
            character_with_experience("Aurelia", 500),
            character_with_experience("Silas", 250),
            character_with_experience("Tomas", 100),
        ];

        let mut characters = MockCharacterRepo::new();
        characters
            .expect_list_top()
            .returning(move |_, _| Ok(ranked.clone()));

        let use_case = GetLeaderboard::new(Arc::new(characters));
        let entries = use_case
            .execute(LeaderboardMetric::Experience, None)
            .await
            .unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].name, "Aurelia");
        assert_eq!(entries[0].value, 500);
        assert_eq!(entries[2].rank, 3);
        assert_eq!(entries[2].value, 100);
    }

    #[tokio::test]
    async fn missing_limit_falls_back_to_default() {
        let mut characters = MockCharacterRepo::new();
        characters
            .expect_list_top()
            .withf(|_, limit| *limit == DEFAULT_LEADERBOARD_LIMIT)
            .returning(|_, _| Ok(Vec::new()));

        let use_case = GetLeaderboard::new(Arc::new(characters));
        use_case
            .execute(LeaderboardMetric::Points, None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn oversized_limit_is_capped() {
        let mut characters = MockCharacterRepo::new();
        characters
            .expect_list_top()
            .withf(|_, limit| *limit == MAX_LEADERBOARD_LIMIT)
            .returning(|_, _| Ok(Vec::new()));

        let use_case = GetLeaderboard::new(Arc::new(characters));
        use_case
            .execute(LeaderboardMetric::Tokens, Some(1000))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn level_metric_ranks_by_level_value() {
        let ranked = vec![character_with_experience("Aurelia", 250)];

        let mut characters = MockCharacterRepo::new();
        characters
            .expect_list_top()
            .withf(|metric, _| *metric == LeaderboardMetric::Level)
            .returning(move |_, _| Ok(ranked.clone()));

        let use_case = GetLeaderboard::new(Arc::new(characters));
        let entries = use_case
            .execute(LeaderboardMetric::Level, Some(10))
            .await
            .unwrap();

        assert_eq!(entries[0].level, 3);
        assert_eq!(entries[0].value, 3);
    }
}
