//! Reservation factory.

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for reservations between an existing room and guest.
///
/// Rows are inserted directly, bypassing availability and price checks, which
/// makes it the way to arrange pre-existing bookings for a test.
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: i32,
    guest_id: i32,
    check_in: NaiveDate,
    check_out: NaiveDate,
    status: String,
}

impl<'a> ReservationFactory<'a> {
    /// Defaults: check-in in 10 days, check-out in 12 days, status `PENDING`.
    pub fn new(db: &'a DatabaseConnection, room_id: i32, guest_id: i32) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            room_id,
            guest_id,
            check_in: today + Duration::days(10),
            check_out: today + Duration::days(12),
            status: "PENDING".to_string(),
        }
    }

    pub fn dates(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.check_in = check_in;
        self.check_out = check_out;
        self
    }

    /// Sets the status: `PENDING`, `CONFIRMED`, `CHECKED_IN`, `CHECKED_OUT` or
    /// `CANCELLED`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            room_id: ActiveValue::Set(self.room_id),
            guest_id: ActiveValue::Set(self.guest_id),
            check_in_date: ActiveValue::Set(self.check_in),
            check_out_date: ActiveValue::Set(self.check_out),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_reservation(
    db: &DatabaseConnection,
    room_id: i32,
    guest_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, room_id, guest_id).build().await
}
