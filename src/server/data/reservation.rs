//! Reservation data repository.
//!
//! Generic over the connection. Booking creation and payment synchronization call it
//! with their open transaction so reads and writes share one atomic unit.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::reservation::ReservationStatus;

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a reservation.
    ///
    /// # Arguments
    /// - `room_id` - Reserved room
    /// - `guest_id` - Guest the reservation belongs to
    /// - `check_in` / `check_out` - Inclusive stay dates
    /// - `status` - Initial status
    ///
    /// # Returns
    /// - `Ok(Model)` - The created reservation
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn create(
        &self,
        room_id: i32,
        guest_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        status: ReservationStatus,
    ) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            room_id: ActiveValue::Set(room_id),
            guest_id: ActiveValue::Set(guest_id),
            check_in_date: ActiveValue::Set(check_in),
            check_out_date: ActiveValue::Set(check_out),
            status: ActiveValue::Set(status.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets all reservations, newest first.
    pub async fn get_all(&self) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .order_by_desc(entity::reservation::Column::CreatedAt)
            .order_by_desc(entity::reservation::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a guest's reservations, newest first.
    pub async fn get_by_guest(
        &self,
        guest_id: i32,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::GuestId.eq(guest_id))
            .order_by_desc(entity::reservation::Column::CreatedAt)
            .order_by_desc(entity::reservation::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the reservations that still hold one or more rooms.
    ///
    /// A reservation holds its room when its status blocks the room (pending,
    /// confirmed or checked in) and its check-out date is on or after `from`.
    ///
    /// # Arguments
    /// - `room_ids` - Rooms to look at
    /// - `from` - First day of interest, normally today
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching reservations ordered by check-in date
    /// - `Err(DbErr)` - Database error
    pub async fn get_blocking_for_rooms(
        &self,
        room_ids: &[i32],
        from: NaiveDate,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        if room_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::RoomId.is_in(room_ids.iter().copied()))
            .filter(entity::reservation::Column::CheckOutDate.gte(from))
            .filter(
                entity::reservation::Column::Status
                    .is_in(ReservationStatus::BLOCKING.iter().map(|s| s.as_str())),
            )
            .order_by_asc(entity::reservation::Column::CheckInDate)
            .all(self.db)
            .await
    }

    /// Moves a reservation from `from` to `to`, only if it is still in `from`.
    ///
    /// # Returns
    /// - `Ok(true)` - Status changed
    /// - `Ok(false)` - No reservation with that id is currently in `from`
    pub async fn transition_status(
        &self,
        id: i32,
        from: ReservationStatus,
        to: ReservationStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Reservation::update_many()
            .col_expr(entity::reservation::Column::Status, Expr::value(to.as_str()))
            .filter(entity::reservation::Column::Id.eq(id))
            .filter(entity::reservation::Column::Status.eq(from.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets the status of a reservation.
    ///
    /// # Returns
    /// - `Ok(true)` - Reservation updated
    /// - `Ok(false)` - No reservation with that id
    pub async fn set_status(&self, id: i32, status: ReservationStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::Reservation::update_many()
            .col_expr(
                entity::reservation::Column::Status,
                Expr::value(status.as_str()),
            )
            .filter(entity::reservation::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
