use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000004_profile::Profile;

static FK_QUEUE_PROFILE_ID: &str = "fk_matchmaking_queue_profile_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchmakingQueue::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchmakingQueue::Id))
                    .col(integer_uniq(MatchmakingQueue::ProfileId))
                    .col(string_len(MatchmakingQueue::GameType, 16))
                    .col(timestamp(MatchmakingQueue::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_QUEUE_PROFILE_ID)
                    .from_tbl(MatchmakingQueue::Table)
                    .from_col(MatchmakingQueue::ProfileId)
                    .to_tbl(Profile::Table)
                    .to_col(Profile::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_QUEUE_PROFILE_ID)
                    .table(MatchmakingQueue::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MatchmakingQueue::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MatchmakingQueue {
    Table,
    Id,
    ProfileId,
    GameType,
    CreatedAt,
}
