use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_reading_passage::ReadingPassage;

static FK_QUESTION_PASSAGE_ID: &str = "fk_comprehension_question_passage_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ComprehensionQuestion::Table)
                    .if_not_exists()
                    .col(pk_auto(ComprehensionQuestion::Id))
                    .col(integer(ComprehensionQuestion::PassageId))
                    .col(text(ComprehensionQuestion::Prompt))
                    .col(json(ComprehensionQuestion::Options))
                    .col(integer(ComprehensionQuestion::CorrectIndex))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_QUESTION_PASSAGE_ID)
                    .from_tbl(ComprehensionQuestion::Table)
                    .from_col(ComprehensionQuestion::PassageId)
                    .to_tbl(ReadingPassage::Table)
                    .to_col(ReadingPassage::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_QUESTION_PASSAGE_ID)
                    .table(ComprehensionQuestion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ComprehensionQuestion::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ComprehensionQuestion {
    Table,
    Id,
    PassageId,
    Prompt,
    Options,
    CorrectIndex,
}
