use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpellingWord::Table)
                    .if_not_exists()
                    .col(pk_auto(SpellingWord::Id))
                    .col(string_uniq(SpellingWord::Word))
                    .col(text(SpellingWord::Definition))
                    .col(text(SpellingWord::ExampleSentence))
                    .col(integer(SpellingWord::Difficulty))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpellingWord::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SpellingWord {
    Table,
    Id,
    Word,
    Definition,
    ExampleSentence,
    Difficulty,
}
