use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261019_000003_create_room_type_table::RoomType,
    m20261019_000004_create_amenity_table::Amenity,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomTypeAmenity::Table)
                    .if_not_exists()
                    .col(integer(RoomTypeAmenity::RoomTypeId))
                    .col(integer(RoomTypeAmenity::AmenityId))
                    .primary_key(
                        Index::create()
                            .col(RoomTypeAmenity::RoomTypeId)
                            .col(RoomTypeAmenity::AmenityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_type_amenity_room_type_id")
                            .from(RoomTypeAmenity::Table, RoomTypeAmenity::RoomTypeId)
                            .to(RoomType::Table, RoomType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_type_amenity_amenity_id")
                            .from(RoomTypeAmenity::Table, RoomTypeAmenity::AmenityId)
                            .to(Amenity::Table, Amenity::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomTypeAmenity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomTypeAmenity {
    Table,
    RoomTypeId,
    AmenityId,
}
