use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReadingPassage::Table)
                    .if_not_exists()
                    .col(pk_auto(ReadingPassage::Id))
                    .col(string(ReadingPassage::Title))
                    .col(text(ReadingPassage::Body))
                    .col(integer(ReadingPassage::Difficulty))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReadingPassage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ReadingPassage {
    Table,
    Id,
    Title,
    Body,
    Difficulty,
}
