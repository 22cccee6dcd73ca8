use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(pk_auto(Profile::Id))
                    .col(string_uniq(Profile::Username))
                    .col(string(Profile::PasswordHash))
                    .col(string(Profile::Avatar))
                    .col(integer(Profile::Experience))
                    .col(timestamp(Profile::CreatedAt))
                    .col(timestamp(Profile::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Profile {
    Table,
    Id,
    Username,
    PasswordHash,
    Avatar,
    Experience,
    CreatedAt,
    UpdatedAt,
}
