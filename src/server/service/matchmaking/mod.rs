//! Queue pairing.
//!
//! Joining inserts an intent-to-play row and immediately tries to pair it
//! with the longest-waiting compatible entry. Pairing consumes both queue
//! rows, fixes the quiz content both players will see, and creates the
//! in-progress match. Clients learn about the pairing by polling
//! [`MatchmakingService::status`].

use dioxus_logger::tracing;
use rand::seq::IndexedRandom;
use sea_orm::DatabaseConnection;

use crate::{
    model::game::{GameType, OpponentDto, QueueStatusDto},
    server::{
        data::{
            content::ContentRepository, game_match::MatchRepository, profile::ProfileRepository,
            queue::QueueRepository,
        },
        error::{game::MatchError, Error},
        service::progression,
    },
};

/// Words drawn for one spelling match.
pub const SPELLING_WORDS_PER_MATCH: usize = 5;

pub struct MatchmakingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchmakingService<'a> {
    /// Creates a new instance of [`MatchmakingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Join the queue for a game type, pairing immediately when possible.
    pub async fn join(
        &self,
        profile_id: i32,
        game_type: GameType,
    ) -> Result<QueueStatusDto, Error> {
        let match_repo = MatchRepository::new(self.db);
        let queue_repo = QueueRepository::new(self.db);

        // A player already in a running match rejoins that match instead of
        // queueing a second time.
        if let Some(game_match) = match_repo.find_in_progress_for(profile_id).await? {
            return self.matched_status(&game_match, profile_id).await;
        }

        if queue_repo.get_by_profile_id(profile_id).await?.is_some() {
            return Err(MatchError::AlreadyQueued.into());
        }

        let opponent_entry = queue_repo
            .oldest_waiting(game_type.into(), profile_id)
            .await?;

        let opponent_entry = match opponent_entry {
            Some(entry) => entry,
            None => {
                queue_repo.create(profile_id, game_type.into()).await?;
                return Ok(QueueStatusDto::Waiting { game_type });
            }
        };

        // Claim the opponent's entry; if it vanished in the meantime the
        // caller simply waits like everyone else.
        let claimed = queue_repo.delete(opponent_entry.id).await?;
        if claimed.rows_affected == 0 {
            queue_repo.create(profile_id, game_type.into()).await?;
            return Ok(QueueStatusDto::Waiting { game_type });
        }

        let game_match = self
            .create_match(opponent_entry.profile_id, profile_id, game_type)
            .await?;

        tracing::info!(
            "Paired profiles {} and {} into {:?} match {}",
            opponent_entry.profile_id,
            profile_id,
            game_type,
            game_match.id
        );

        self.matched_status(&game_match, profile_id).await
    }

    /// Current queue state for a profile.
    pub async fn status(&self, profile_id: i32) -> Result<QueueStatusDto, Error> {
        let match_repo = MatchRepository::new(self.db);
        let queue_repo = QueueRepository::new(self.db);

        if let Some(game_match) = match_repo.find_in_progress_for(profile_id).await? {
            return self.matched_status(&game_match, profile_id).await;
        }

        if let Some(entry) = queue_repo.get_by_profile_id(profile_id).await? {
            return Ok(QueueStatusDto::Waiting {
                game_type: entry.game_type.into(),
            });
        }

        Ok(QueueStatusDto::Idle)
    }

    /// Remove the caller's pending entry. A no-op when not queued.
    pub async fn leave(&self, profile_id: i32) -> Result<(), Error> {
        let queue_repo = QueueRepository::new(self.db);

        queue_repo.delete_by_profile_id(profile_id).await?;

        Ok(())
    }

    /// Fix the quiz content and create the in-progress match row.
    ///
    /// `player_one` is the longer-waiting player.
    async fn create_match(
        &self,
        player_one_id: i32,
        player_two_id: i32,
        game_type: GameType,
    ) -> Result<entity::game_match::Model, Error> {
        let content_repo = ContentRepository::new(self.db);
        let match_repo = MatchRepository::new(self.db);

        match game_type {
            GameType::Reading => {
                let passages = content_repo.all_passages().await?;
                let passage = passages
                    .choose(&mut rand::rng())
                    .ok_or(MatchError::ContentUnavailable)?;

                let questions = content_repo.questions_for(passage.id).await?;
                if questions.is_empty() {
                    return Err(MatchError::ContentUnavailable.into());
                }

                Ok(match_repo
                    .create(
                        player_one_id,
                        player_two_id,
                        game_type.into(),
                        Some(passage.id),
                        None,
                        questions.len() as i32,
                    )
                    .await?)
            }
            GameType::Spelling => {
                let words = content_repo.all_words().await?;
                if words.is_empty() {
                    return Err(MatchError::ContentUnavailable.into());
                }

                let picked: Vec<i32> = words
                    .choose_multiple(&mut rand::rng(), SPELLING_WORDS_PER_MATCH)
                    .map(|word| word.id)
                    .collect();

                Ok(match_repo
                    .create(
                        player_one_id,
                        player_two_id,
                        game_type.into(),
                        None,
                        Some(serde_json::json!(picked)),
                        picked.len() as i32,
                    )
                    .await?)
            }
        }
    }

    async fn matched_status(
        &self,
        game_match: &entity::game_match::Model,
        profile_id: i32,
    ) -> Result<QueueStatusDto, Error> {
        let opponent = opponent_dto(self.db, game_match, profile_id).await?;

        Ok(QueueStatusDto::Matched {
            match_id: game_match.id,
            game_type: game_match.game_type.into(),
            opponent,
        })
    }
}

/// The other participant of a match, as shown to `profile_id`.
pub async fn opponent_dto(
    db: &DatabaseConnection,
    game_match: &entity::game_match::Model,
    profile_id: i32,
) -> Result<OpponentDto, Error> {
    let opponent_id = if game_match.player_one_id == profile_id {
        game_match.player_two_id
    } else {
        game_match.player_one_id
    };

    let profile = ProfileRepository::new(db)
        .get_by_id(opponent_id)
        .await?
        .ok_or_else(|| {
            // Would only occur if the foreign key constraints on match
            // participants are not enforced
            Error::InternalError(format!(
                "Failed to find opponent profile ID {} for match ID {}",
                opponent_id, game_match.id
            ))
        })?;

    Ok(OpponentDto {
        username: profile.username,
        avatar: profile.avatar,
        rank_title: progression::rank_for(profile.experience).title,
    })
}

#[cfg(test)]
mod tests;
