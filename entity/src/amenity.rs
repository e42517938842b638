use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "amenity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::room_type_amenity::Entity")]
    RoomTypeAmenity,
}

impl Related<super::room_type::Entity> for Entity {
    fn to() -> RelationDef {
        super::room_type_amenity::Relation::RoomType.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::room_type_amenity::Relation::Amenity.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
