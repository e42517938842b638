use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Otp::Table)
                    .if_not_exists()
                    .col(pk_auto(Otp::Id))
                    .col(string_uniq(Otp::Email))
                    .col(string(Otp::Code))
                    .col(timestamp_with_time_zone(Otp::ExpiresAt))
                    .col(integer(Otp::FailedAttempts).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Otp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Otp {
    Table,
    Id,
    Email,
    Code,
    ExpiresAt,
    FailedAttempts,
}
