//! Match lifecycle: serving content to participants, collecting score
//! reports, and settling experience when both reports are in.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::game::{
        MatchContentDto, MatchHistoryEntryDto, MatchOutcome, MatchResultDto, PassageDto,
        QuestionDto, SpellingWordDto,
    },
    server::{
        data::{content::ContentRepository, game_match::MatchRepository, profile::ProfileRepository},
        error::{game::MatchError, Error},
        service::{matchmaking::opponent_dto, progression, user::UserService},
    },
};

pub struct MatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchService<'a> {
    /// Creates a new instance of [`MatchService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The quiz content of a match, visible only to its participants.
    pub async fn content(
        &self,
        profile_id: i32,
        match_id: i32,
    ) -> Result<MatchContentDto, Error> {
        let game_match = self.participant_match(profile_id, match_id).await?;
        let content_repo = ContentRepository::new(self.db);

        match game_match.game_type {
            entity::GameType::Reading => {
                let passage_id = game_match.passage_id.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Reading match ID {} has no passage assigned",
                        game_match.id
                    ))
                })?;

                let passage = content_repo.get_passage(passage_id).await?.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Failed to find passage ID {} for match ID {}",
                        passage_id, game_match.id
                    ))
                })?;

                let questions = content_repo.questions_for(passage.id).await?;

                Ok(MatchContentDto::Reading {
                    passage: PassageDto {
                        id: passage.id,
                        title: passage.title,
                        body: passage.body,
                        difficulty: passage.difficulty,
                    },
                    questions: questions
                        .into_iter()
                        .map(question_dto)
                        .collect::<Result<Vec<_>, _>>()?,
                })
            }
            entity::GameType::Spelling => {
                let word_ids = word_ids(&game_match)?;
                let words = content_repo.words_by_ids(word_ids.clone()).await?;

                // Preserve the order fixed at pairing time
                let mut ordered = Vec::with_capacity(word_ids.len());
                for id in word_ids {
                    let word = words.iter().find(|w| w.id == id).ok_or_else(|| {
                        Error::InternalError(format!(
                            "Failed to find spelling word ID {} for match ID {}",
                            id, game_match.id
                        ))
                    })?;

                    ordered.push(SpellingWordDto {
                        id: word.id,
                        word: word.word.clone(),
                        definition: word.definition.clone(),
                        example_sentence: word.example_sentence.clone(),
                    });
                }

                Ok(MatchContentDto::Spelling { words: ordered })
            }
        }
    }

    /// Record a participant's score report.
    ///
    /// The first report stores the reporter's score. The second settles the
    /// match: the winner is the higher score (a draw leaves no winner) and
    /// both players are awarded experience.
    pub async fn report(
        &self,
        profile_id: i32,
        match_id: i32,
        score: i32,
        total: i32,
    ) -> Result<MatchResultDto, Error> {
        let game_match = self.participant_match(profile_id, match_id).await?;
        let match_repo = MatchRepository::new(self.db);

        if game_match.status == entity::MatchStatus::Completed {
            return Err(MatchError::MatchCompleted.into());
        }

        if total != game_match.total_questions {
            return Err(MatchError::InvalidReport(format!(
                "expected {} questions, got {}",
                game_match.total_questions, total
            ))
            .into());
        }

        let is_player_one = game_match.player_one_id == profile_id;
        let already_reported = if is_player_one {
            game_match.player_one_score.is_some()
        } else {
            game_match.player_two_score.is_some()
        };

        if already_reported {
            return Err(MatchError::AlreadyReported.into());
        }

        let score = score.clamp(0, total);
        let game_match = match_repo
            .record_score(game_match, is_player_one, score)
            .await?;

        let game_match = match (game_match.player_one_score, game_match.player_two_score) {
            (Some(one), Some(two)) => self.settle(game_match, one, two).await?,
            _ => game_match,
        };

        self.result_dto(&game_match, profile_id).await
    }

    /// The match state as seen by one participant.
    pub async fn result(&self, profile_id: i32, match_id: i32) -> Result<MatchResultDto, Error> {
        let game_match = self.participant_match(profile_id, match_id).await?;

        self.result_dto(&game_match, profile_id).await
    }

    /// Completed matches for a profile, most recent first.
    pub async fn history(&self, profile_id: i32) -> Result<Vec<MatchHistoryEntryDto>, Error> {
        let match_repo = MatchRepository::new(self.db);
        let profile_repo = ProfileRepository::new(self.db);

        let matches = match_repo.completed_for(profile_id).await?;

        let mut entries = Vec::with_capacity(matches.len());
        for game_match in matches {
            let opponent_id = if game_match.player_one_id == profile_id {
                game_match.player_two_id
            } else {
                game_match.player_one_id
            };

            let opponent = profile_repo
                .get_by_id(opponent_id)
                .await?
                .map(|p| p.username)
                .unwrap_or_else(|| "unknown".to_string());

            let (your_score, opponent_score) = scores_for(&game_match, profile_id);
            let (your_score, opponent_score) =
                (your_score.unwrap_or(0), opponent_score.unwrap_or(0));
            let outcome = outcome_for(&game_match, profile_id);

            entries.push(MatchHistoryEntryDto {
                match_id: game_match.id,
                game_type: game_match.game_type.into(),
                opponent,
                your_score,
                opponent_score,
                outcome,
                experience_gained: progression::experience_for(
                    your_score,
                    game_match.total_questions,
                    outcome == MatchOutcome::Won,
                ),
                completed_at: game_match.completed_at.unwrap_or(game_match.created_at),
            });
        }

        Ok(entries)
    }

    /// Both scores are in: decide the winner and pay out experience.
    async fn settle(
        &self,
        game_match: entity::game_match::Model,
        player_one_score: i32,
        player_two_score: i32,
    ) -> Result<entity::game_match::Model, Error> {
        let match_repo = MatchRepository::new(self.db);
        let user_service = UserService::new(self.db);

        let winner_id = if player_one_score > player_two_score {
            Some(game_match.player_one_id)
        } else if player_two_score > player_one_score {
            Some(game_match.player_two_id)
        } else {
            None
        };

        let game_match = match_repo.complete(game_match, winner_id).await?;

        for (player_id, score) in [
            (game_match.player_one_id, player_one_score),
            (game_match.player_two_id, player_two_score),
        ] {
            let gained = progression::experience_for(
                score,
                game_match.total_questions,
                winner_id == Some(player_id),
            );
            user_service.add_experience(player_id, gained).await?;
        }

        tracing::info!(
            "Match {} completed: {} vs {} ({}-{}), winner {:?}",
            game_match.id,
            game_match.player_one_id,
            game_match.player_two_id,
            player_one_score,
            player_two_score,
            winner_id
        );

        Ok(game_match)
    }

    async fn participant_match(
        &self,
        profile_id: i32,
        match_id: i32,
    ) -> Result<entity::game_match::Model, Error> {
        let game_match = MatchRepository::new(self.db)
            .get_by_id(match_id)
            .await?
            .ok_or(MatchError::MatchNotFound)?;

        if game_match.player_one_id != profile_id && game_match.player_two_id != profile_id {
            return Err(MatchError::NotParticipant.into());
        }

        Ok(game_match)
    }

    async fn result_dto(
        &self,
        game_match: &entity::game_match::Model,
        profile_id: i32,
    ) -> Result<MatchResultDto, Error> {
        let opponent = opponent_dto(self.db, game_match, profile_id).await?;
        let completed = game_match.status == entity::MatchStatus::Completed;
        let (your_score, opponent_score) = scores_for(game_match, profile_id);

        let (outcome, experience_gained) = if completed {
            let outcome = outcome_for(game_match, profile_id);
            let gained = progression::experience_for(
                your_score.unwrap_or(0),
                game_match.total_questions,
                outcome == MatchOutcome::Won,
            );
            (Some(outcome), Some(gained))
        } else {
            (None, None)
        };

        Ok(MatchResultDto {
            match_id: game_match.id,
            game_type: game_match.game_type.into(),
            completed,
            opponent,
            your_score,
            opponent_score,
            total_questions: game_match.total_questions,
            outcome,
            experience_gained,
        })
    }
}

fn scores_for(
    game_match: &entity::game_match::Model,
    profile_id: i32,
) -> (Option<i32>, Option<i32>) {
    if game_match.player_one_id == profile_id {
        (game_match.player_one_score, game_match.player_two_score)
    } else {
        (game_match.player_two_score, game_match.player_one_score)
    }
}

fn outcome_for(game_match: &entity::game_match::Model, profile_id: i32) -> MatchOutcome {
    match game_match.winner_id {
        Some(winner_id) if winner_id == profile_id => MatchOutcome::Won,
        Some(_) => MatchOutcome::Lost,
        None => MatchOutcome::Draw,
    }
}

fn question_dto(question: entity::comprehension_question::Model) -> Result<QuestionDto, Error> {
    let options: Vec<String> = serde_json::from_value(question.options).map_err(|e| {
        Error::InternalError(format!(
            "Malformed options for question ID {}: {}",
            question.id, e
        ))
    })?;

    Ok(QuestionDto {
        id: question.id,
        prompt: question.prompt,
        options,
        correct_index: question.correct_index,
    })
}

fn word_ids(game_match: &entity::game_match::Model) -> Result<Vec<i32>, Error> {
    let value = game_match.word_ids.clone().ok_or_else(|| {
        Error::InternalError(format!(
            "Spelling match ID {} has no words assigned",
            game_match.id
        ))
    })?;

    serde_json::from_value(value).map_err(|e| {
        Error::InternalError(format!(
            "Malformed word ids for match ID {}: {}",
            game_match.id, e
        ))
    })
}

#[cfg(test)]
mod tests;
