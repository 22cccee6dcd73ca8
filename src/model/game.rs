use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    Reading,
    Spelling,
}

impl GameType {
    pub fn label(&self) -> &'static str {
        match self {
            GameType::Reading => "Reading Comprehension",
            GameType::Spelling => "Spelling Bee",
        }
    }
}

#[cfg(feature = "server")]
impl From<GameType> for entity::GameType {
    fn from(game_type: GameType) -> Self {
        match game_type {
            GameType::Reading => entity::GameType::Reading,
            GameType::Spelling => entity::GameType::Spelling,
        }
    }
}

#[cfg(feature = "server")]
impl From<entity::GameType> for GameType {
    fn from(game_type: entity::GameType) -> Self {
        match game_type {
            entity::GameType::Reading => GameType::Reading,
            entity::GameType::Spelling => GameType::Spelling,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct JoinQueueDto {
    pub game_type: GameType,
}

/// Lightweight view of the player on the other side of a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct OpponentDto {
    pub username: String,
    pub avatar: String,
    pub rank_title: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QueueStatusDto {
    /// Not queued and no match in progress.
    Idle,
    Waiting {
        game_type: GameType,
    },
    Matched {
        match_id: i32,
        game_type: GameType,
        opponent: OpponentDto,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PassageDto {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub difficulty: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct QuestionDto {
    pub id: i32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SpellingWordDto {
    pub id: i32,
    pub word: String,
    pub definition: String,
    pub example_sentence: String,
}

/// The quiz content both participants of a match play over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchContentDto {
    Reading {
        passage: PassageDto,
        questions: Vec<QuestionDto>,
    },
    Spelling {
        words: Vec<SpellingWordDto>,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ReportScoreDto {
    pub score: i32,
    pub total: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Won,
    Lost,
    Draw,
}

/// State of one match as seen by the requesting participant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MatchResultDto {
    pub match_id: i32,
    pub game_type: GameType,
    pub completed: bool,
    pub opponent: OpponentDto,
    pub your_score: Option<i32>,
    pub opponent_score: Option<i32>,
    pub total_questions: i32,
    pub outcome: Option<MatchOutcome>,
    pub experience_gained: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MatchHistoryEntryDto {
    pub match_id: i32,
    pub game_type: GameType,
    pub opponent: String,
    pub your_score: i32,
    pub opponent_score: i32,
    pub outcome: MatchOutcome,
    pub experience_gained: i32,
    pub completed_at: NaiveDateTime,
}
