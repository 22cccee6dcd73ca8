use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Which quiz a match is played over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum GameType {
    #[sea_orm(string_value = "reading")]
    Reading,
    #[sea_orm(string_value = "spelling")]
    Spelling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum MatchStatus {
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "game_match")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_one_id: i32,
    pub player_two_id: i32,
    pub game_type: GameType,
    /// Set for reading matches, NULL for spelling matches.
    pub passage_id: Option<i32>,
    /// JSON array of spelling word ids, NULL for reading matches.
    pub word_ids: Option<Json>,
    pub total_questions: i32,
    pub player_one_score: Option<i32>,
    pub player_two_score: Option<i32>,
    /// NULL while in progress or when the match ended in a draw.
    pub winner_id: Option<i32>,
    pub status: MatchStatus,
    pub created_at: DateTime,
    pub completed_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::PlayerOneId",
        to = "super::profile::Column::Id"
    )]
    PlayerOne,
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::PlayerTwoId",
        to = "super::profile::Column::Id"
    )]
    PlayerTwo,
    #[sea_orm(
        belongs_to = "super::reading_passage::Entity",
        from = "Column::PassageId",
        to = "super::reading_passage::Column::Id"
    )]
    ReadingPassage,
}

impl Related<super::reading_passage::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReadingPassage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
