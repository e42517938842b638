//! Room factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for rooms of an existing room type.
///
/// # Example
///
/// ```rust,ignore
/// let room = RoomFactory::new(db, room_type.id)
///     .price(250.0)
///     .status("MAINTENANCE")
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    room_type_id: i32,
    room_number: String,
    price: f64,
    status: String,
}

impl<'a> RoomFactory<'a> {
    /// Defaults: unique room number, price 100.00, status `AVAILABLE`.
    pub fn new(db: &'a DatabaseConnection, room_type_id: i32) -> Self {
        Self {
            db,
            room_type_id,
            room_number: format!("R{}", next_id()),
            price: 100.0,
            status: "AVAILABLE".to_string(),
        }
    }

    pub fn room_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the status: `AVAILABLE`, `UNAVAILABLE` or `MAINTENANCE`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        let now = Utc::now();
        entity::room::ActiveModel {
            room_number: ActiveValue::Set(self.room_number),
            room_type_id: ActiveValue::Set(self.room_type_id),
            price: ActiveValue::Set(self.price),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_room(
    db: &DatabaseConnection,
    room_type_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, room_type_id).build().await
}
