use sea_orm::entity::prelude::*;

/// Junction table for the many-to-many link between room types and amenities.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "room_type_amenity")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub room_type_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub amenity_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room_type::Entity",
        from = "Column::RoomTypeId",
        to = "super::room_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RoomType,
    #[sea_orm(
        belongs_to = "super::amenity::Entity",
        from = "Column::AmenityId",
        to = "super::amenity::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Amenity,
}

impl Related<super::room_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomType.def()
    }
}

impl Related<super::amenity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Amenity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
