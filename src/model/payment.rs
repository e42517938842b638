use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PaymentDto {
    pub id: i32,
    pub reservation_id: i32,
    pub transaction_ref: String,
    pub amount: f64,
    pub status: String,
    pub transaction_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UpdatePaymentStatusDto {
    /// `PENDING`, `PAID` or `FAILED`.
    pub status: String,
}

/// Result of a payment status change: the payment and the status its
/// reservation ended up in.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PaymentStatusUpdateDto {
    pub payment: PaymentDto,
    pub reservation_status: String,
}
