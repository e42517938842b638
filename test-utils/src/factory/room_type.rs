//! Room type factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct RoomTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
}

impl<'a> RoomTypeFactory<'a> {
    /// Defaults: name `"Room Type {id}"`, no description.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Room Type {}", next_id()),
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub async fn build(self) -> Result<entity::room_type::Model, DbErr> {
        entity::room_type::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_room_type(db: &DatabaseConnection) -> Result<entity::room_type::Model, DbErr> {
    RoomTypeFactory::new(db).build().await
}

/// Links an amenity to a room type.
pub async fn link_amenity(
    db: &DatabaseConnection,
    room_type_id: i32,
    amenity_id: i32,
) -> Result<entity::room_type_amenity::Model, DbErr> {
    entity::room_type_amenity::ActiveModel {
        room_type_id: ActiveValue::Set(room_type_id),
        amenity_id: ActiveValue::Set(amenity_id),
    }
    .insert(db)
    .await
}
