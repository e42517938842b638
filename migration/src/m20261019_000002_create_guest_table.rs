use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guest::Table)
                    .if_not_exists()
                    .col(pk_auto(Guest::Id))
                    .col(string(Guest::FirstName))
                    .col(string(Guest::LastName))
                    .col(string_uniq(Guest::Email))
                    .col(string_uniq(Guest::Phone))
                    .col(string(Guest::PasswordHash))
                    .col(string(Guest::Status).default("INACTIVE"))
                    .col(
                        timestamp_with_time_zone(Guest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guest {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    PasswordHash,
    Status,
    CreatedAt,
}
