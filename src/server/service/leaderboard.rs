use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::leaderboard::LeaderboardEntryDto,
    server::{
        data::{game_match::MatchRepository, profile::ProfileRepository},
        error::Error,
        service::progression,
    },
};

pub const DEFAULT_LIMIT: u64 = 25;
pub const MAX_LIMIT: u64 = 100;

pub struct LeaderboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    /// Creates a new instance of [`LeaderboardService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The top profiles by experience with their win counts.
    pub async fn top(&self, limit: Option<u64>) -> Result<Vec<LeaderboardEntryDto>, Error> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);

        let profile_repo = ProfileRepository::new(self.db);
        let match_repo = MatchRepository::new(self.db);

        let profiles = profile_repo.top_by_experience(limit).await?;

        let profile_ids: Vec<i32> = profiles.iter().map(|p| p.id).collect();
        let wins: HashMap<i32, i64> = match_repo
            .wins_by_profile_ids(profile_ids)
            .await?
            .into_iter()
            .filter_map(|(winner_id, count)| winner_id.map(|id| (id, count)))
            .collect();

        Ok(profiles
            .into_iter()
            .enumerate()
            .map(|(index, profile)| LeaderboardEntryDto {
                position: index as i32 + 1,
                rank_title: progression::rank_for(profile.experience).title,
                wins: wins.get(&profile.id).copied().unwrap_or(0) as i32,
                username: profile.username,
                avatar: profile.avatar,
                experience: profile.experience,
            })
            .collect())
    }
}
