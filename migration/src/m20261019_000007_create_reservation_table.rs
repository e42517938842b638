use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261019_000002_create_guest_table::Guest, m20261019_000006_create_room_table::Room,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::RoomId))
                    .col(integer(Reservation::GuestId))
                    .col(date(Reservation::CheckInDate))
                    .col(date(Reservation::CheckOutDate))
                    .col(string(Reservation::Status).default("PENDING"))
                    .col(
                        timestamp_with_time_zone(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_room_id")
                            .from(Reservation::Table, Reservation::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_guest_id")
                            .from(Reservation::Table, Reservation::GuestId)
                            .to(Guest::Table, Guest::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_room_check_out")
                    .table(Reservation::Table)
                    .col(Reservation::RoomId)
                    .col(Reservation::CheckOutDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    RoomId,
    GuestId,
    CheckInDate,
    CheckOutDate,
    Status,
    CreatedAt,
}
