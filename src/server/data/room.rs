//! Room data repository.
//!
//! Generic over the connection so that the booking transaction can lock and read the
//! room it is reserving.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::room::{CreateRoomParams, RoomStatus, UpdateRoomParams};

pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRoomParams) -> Result<entity::room::Model, DbErr> {
        let now = Utc::now();
        entity::room::ActiveModel {
            room_number: ActiveValue::Set(params.room_number),
            room_type_id: ActiveValue::Set(params.room_type_id),
            price: ActiveValue::Set(params.price),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_number(
        &self,
        room_number: &str,
    ) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::RoomNumber.eq(room_number))
            .one(self.db)
            .await
    }

    /// Gets a room together with its room type.
    pub async fn find_by_id_with_type(
        &self,
        id: i32,
    ) -> Result<Option<(entity::room::Model, Option<entity::room_type::Model>)>, DbErr> {
        entity::prelude::Room::find_by_id(id)
            .find_also_related(entity::prelude::RoomType)
            .one(self.db)
            .await
    }

    /// Gets every room with its room type, ordered by room number.
    pub async fn get_all_with_type(
        &self,
    ) -> Result<Vec<(entity::room::Model, Option<entity::room_type::Model>)>, DbErr> {
        entity::prelude::Room::find()
            .find_also_related(entity::prelude::RoomType)
            .order_by_asc(entity::room::Column::RoomNumber)
            .all(self.db)
            .await
    }

    /// Gets rooms in the given status with their room types, ordered by room number.
    pub async fn get_by_status_with_type(
        &self,
        status: RoomStatus,
    ) -> Result<Vec<(entity::room::Model, Option<entity::room_type::Model>)>, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::Status.eq(status.as_str()))
            .find_also_related(entity::prelude::RoomType)
            .order_by_asc(entity::room::Column::RoomNumber)
            .all(self.db)
            .await
    }

    /// Applies the provided fields to a room and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated room
    /// - `Ok(None)` - No room with that id
    pub async fn update(
        &self,
        params: UpdateRoomParams,
    ) -> Result<Option<entity::room::Model>, DbErr> {
        let Some(existing) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active: entity::room::ActiveModel = existing.into();
        if let Some(room_number) = params.room_number {
            active.room_number = ActiveValue::Set(room_number);
        }
        if let Some(room_type_id) = params.room_type_id {
            active.room_type_id = ActiveValue::Set(room_type_id);
        }
        if let Some(price) = params.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a room.
    ///
    /// # Returns
    /// - `Ok(true)` - Room deleted
    /// - `Ok(false)` - No room with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Room::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts reservations of any status referencing the room.
    pub async fn reservation_count(&self, room_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::RoomId.eq(room_id))
            .count(self.db)
            .await
    }

    /// Takes the write lock on a room row without changing its data.
    ///
    /// Must run inside a transaction. Every booking for the room locks the row first,
    /// so concurrent bookings for the same room run their availability check and
    /// insert one after another.
    ///
    /// # Returns
    /// - `Ok(true)` - Row locked
    /// - `Ok(false)` - No room with that id
    pub async fn lock(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Room::update_many()
            .col_expr(
                entity::room::Column::Id,
                Expr::col(entity::room::Column::Id).into(),
            )
            .filter(entity::room::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
