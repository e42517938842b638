//! Payment domain models.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::{
    model::payment::{PaymentDto, PaymentStatusUpdateDto},
    server::{
        error::{internal::InternalError, AppError},
        model::reservation::ReservationStatus,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Failed => "FAILED",
        }
    }

    /// Reservation status a payment in this status forces.
    ///
    /// `Paid` confirms the reservation and `Failed` cancels it. `Pending` leaves the
    /// reservation as it is.
    pub fn forced_reservation_status(&self) -> Option<ReservationStatus> {
        match self {
            Self::Pending => None,
            Self::Paid => Some(ReservationStatus::Confirmed),
            Self::Failed => Some(ReservationStatus::Cancelled),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "PAID" => Ok(Self::Paid),
            "FAILED" => Ok(Self::Failed),
            other => Err(AppError::Validation(format!(
                "Invalid payment status '{}', expected PENDING, PAID or FAILED",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub reservation_id: i32,
    /// External payment reference supplied with the booking.
    pub transaction_ref: String,
    pub amount: f64,
    pub status: PaymentStatus,
    pub transaction_date: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Result<Self, AppError> {
        let status = entity
            .status
            .parse::<PaymentStatus>()
            .map_err(|_| InternalError::UnknownStoredValue {
                field: "payment.status",
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            reservation_id: entity.reservation_id,
            transaction_ref: entity.transaction_ref,
            amount: entity.amount,
            status,
            transaction_date: entity.transaction_date,
        })
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            reservation_id: self.reservation_id,
            transaction_ref: self.transaction_ref,
            amount: self.amount,
            status: self.status.as_str().to_string(),
            transaction_date: self.transaction_date,
        }
    }
}

/// Outcome of a payment status change.
#[derive(Debug, Clone)]
pub struct PaymentStatusUpdate {
    pub payment: Payment,
    /// Status of the owning reservation after the change.
    pub reservation_status: ReservationStatus,
}

impl PaymentStatusUpdate {
    pub fn into_dto(self) -> PaymentStatusUpdateDto {
        PaymentStatusUpdateDto {
            payment: self.payment.into_dto(),
            reservation_status: self.reservation_status.as_str().to_string(),
        }
    }
}
