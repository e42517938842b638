//! Reservation domain models, status transitions and booking parameters.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::{
    model::reservation::{
        CreateReservationDto, CreatedReservationDto, ReservationDetailsDto, ReservationDto,
    },
    server::{
        error::{internal::InternalError, AppError},
        model::{
            guest::Guest,
            payment::{Payment, PaymentStatus},
            room::Room,
        },
        util::{date_range::parse_day, money},
    },
};

/// Lifecycle state of a reservation.
///
/// ```text
/// PENDING ──> CONFIRMED ──> CHECKED_IN ──> CHECKED_OUT
///    │            │
///    └────────────┴──> CANCELLED
/// ```
///
/// `CheckedOut` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl ReservationStatus {
    /// Statuses that hold a room for the reservation's days.
    pub const BLOCKING: [ReservationStatus; 3] = [
        ReservationStatus::Pending,
        ReservationStatus::Confirmed,
        ReservationStatus::CheckedIn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::CheckedIn => "CHECKED_IN",
            Self::CheckedOut => "CHECKED_OUT",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Whether a reservation in this status occupies its room.
    pub fn blocks_room(&self) -> bool {
        Self::BLOCKING.contains(self)
    }

    /// Whether the transition table allows moving from `self` to `next`.
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        use ReservationStatus::*;

        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, CheckedIn)
                | (Confirmed, Cancelled)
                | (CheckedIn, CheckedOut)
        )
    }
}

impl FromStr for ReservationStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "CHECKED_IN" => Ok(Self::CheckedIn),
            "CHECKED_OUT" => Ok(Self::CheckedOut),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(AppError::Validation(format!(
                "Invalid reservation status '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub room_id: i32,
    pub guest_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn from_entity(entity: entity::reservation::Model) -> Result<Self, AppError> {
        let status = entity
            .status
            .parse::<ReservationStatus>()
            .map_err(|_| InternalError::UnknownStoredValue {
                field: "reservation.status",
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            room_id: entity.room_id,
            guest_id: entity.guest_id,
            check_in: entity.check_in_date,
            check_out: entity.check_out_date,
            status,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            room_id: self.room_id,
            guest_id: self.guest_id,
            check_in_date: self.check_in,
            check_out_date: self.check_out,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
        }
    }
}

/// A reservation with its room, guest and payments.
#[derive(Debug, Clone)]
pub struct ReservationDetails {
    pub reservation: Reservation,
    pub room: Room,
    pub guest: Guest,
    pub payments: Vec<Payment>,
}

impl ReservationDetails {
    pub fn into_dto(self) -> ReservationDetailsDto {
        ReservationDetailsDto {
            reservation: self.reservation.into_dto(),
            room: self.room.into_dto(),
            guest: self.guest.into_dto(),
            payments: self.payments.into_iter().map(|p| p.into_dto()).collect(),
        }
    }
}

/// A freshly booked reservation and the payment created with it.
#[derive(Debug, Clone)]
pub struct CreatedReservation {
    pub reservation: Reservation,
    pub payment: Payment,
}

impl CreatedReservation {
    pub fn into_dto(self) -> CreatedReservationDto {
        CreatedReservationDto {
            reservation: self.reservation.into_dto(),
            payment: self.payment.into_dto(),
        }
    }
}

/// Booking parameters after presence and format validation.
///
/// Business rules (dates in the future, price, availability) are checked by the
/// reservation service.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub room_id: i32,
    pub guest_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Amount the caller claims to pay. Must equal the computed price.
    pub amount: Decimal,
    pub transaction_ref: String,
    pub payment_status: PaymentStatus,
}

impl CreateReservationParams {
    /// Converts a booking request.
    ///
    /// # Arguments
    /// - `dto` - Raw booking request
    /// - `caller_guest_id` - Id of the calling guest. Overrides `dto.guest_id` so a
    ///   guest can only book for itself.
    ///
    /// # Returns
    /// - `Ok(CreateReservationParams)` - All fields present and well formed
    /// - `Err(AppError::Validation)` - Missing field, malformed date, non-finite
    ///   amount or unknown payment status
    pub fn from_dto(
        dto: CreateReservationDto,
        caller_guest_id: Option<i32>,
    ) -> Result<Self, AppError> {
        let guest_id = caller_guest_id.or(dto.guest_id);
        let transaction_ref = dto.payment_id.filter(|r| !r.trim().is_empty());

        let (
            Some(room_id),
            Some(guest_id),
            Some(check_in),
            Some(check_out),
            Some(amount),
            Some(transaction_ref),
            Some(payment_status),
        ) = (
            dto.room_id,
            guest_id,
            dto.check_in_date,
            dto.check_out_date,
            dto.amount,
            transaction_ref,
            dto.payment_status,
        )
        else {
            return Err(AppError::Validation("All fields are required.".to_string()));
        };

        let amount = money::to_decimal(amount)
            .ok_or_else(|| AppError::Validation("Amount must be a finite number.".to_string()))?;

        Ok(Self {
            room_id,
            guest_id,
            check_in: parse_day(&check_in)?,
            check_out: parse_day(&check_out)?,
            amount,
            transaction_ref: transaction_ref.trim().to_string(),
            payment_status: payment_status.trim().parse()?,
        })
    }
}
