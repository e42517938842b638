use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{guest::GuestDto, payment::PaymentDto, room::RoomDto};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ReservationDto {
    pub id: i32,
    pub room_id: i32,
    pub guest_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// A reservation with its room, guest and payments.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ReservationDetailsDto {
    #[serde(flatten)]
    pub reservation: ReservationDto,
    pub room: RoomDto,
    pub guest: GuestDto,
    pub payments: Vec<PaymentDto>,
}

/// Booking request.
///
/// Every field is required. They are optional here so that a missing field is
/// reported as a validation error. Dates are ISO `YYYY-MM-DD` strings. `guest_id`
/// is ignored for guest callers, who always book for themselves.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct CreateReservationDto {
    pub room_id: Option<i32>,
    pub guest_id: Option<i32>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub amount: Option<f64>,
    pub payment_id: Option<String>,
    pub payment_status: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreatedReservationDto {
    pub reservation: ReservationDto,
    pub payment: PaymentDto,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UpdateReservationStatusDto {
    /// `PENDING`, `CONFIRMED`, `CHECKED_IN`, `CHECKED_OUT` or `CANCELLED`.
    pub status: String,
}
