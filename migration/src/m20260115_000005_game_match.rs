use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_reading_passage::ReadingPassage;
use crate::m20260115_000004_profile::Profile;

static FK_MATCH_PLAYER_ONE_ID: &str = "fk_game_match_player_one_id";
static FK_MATCH_PLAYER_TWO_ID: &str = "fk_game_match_player_two_id";
static FK_MATCH_PASSAGE_ID: &str = "fk_game_match_passage_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(GameMatch::Id))
                    .col(integer(GameMatch::PlayerOneId))
                    .col(integer(GameMatch::PlayerTwoId))
                    .col(string_len(GameMatch::GameType, 16))
                    .col(integer_null(GameMatch::PassageId))
                    .col(json_null(GameMatch::WordIds))
                    .col(integer(GameMatch::TotalQuestions))
                    .col(integer_null(GameMatch::PlayerOneScore))
                    .col(integer_null(GameMatch::PlayerTwoScore))
                    .col(integer_null(GameMatch::WinnerId))
                    .col(string_len(GameMatch::Status, 16))
                    .col(timestamp(GameMatch::CreatedAt))
                    .col(timestamp_null(GameMatch::CompletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_PLAYER_ONE_ID)
                    .from_tbl(GameMatch::Table)
                    .from_col(GameMatch::PlayerOneId)
                    .to_tbl(Profile::Table)
                    .to_col(Profile::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_PLAYER_TWO_ID)
                    .from_tbl(GameMatch::Table)
                    .from_col(GameMatch::PlayerTwoId)
                    .to_tbl(Profile::Table)
                    .to_col(Profile::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_PASSAGE_ID)
                    .from_tbl(GameMatch::Table)
                    .from_col(GameMatch::PassageId)
                    .to_tbl(ReadingPassage::Table)
                    .to_col(ReadingPassage::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_MATCH_PASSAGE_ID,
            FK_MATCH_PLAYER_TWO_ID,
            FK_MATCH_PLAYER_ONE_ID,
        ] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(fk).table(GameMatch::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(GameMatch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GameMatch {
    Table,
    Id,
    PlayerOneId,
    PlayerTwoId,
    GameType,
    PassageId,
    WordIds,
    TotalQuestions,
    PlayerOneScore,
    PlayerTwoScore,
    WinnerId,
    Status,
    CreatedAt,
    CompletedAt,
}
