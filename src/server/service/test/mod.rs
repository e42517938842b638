use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::server::model::{payment::PaymentStatus, reservation::CreateReservationParams};


fn days_from_today(days: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(days)
}

/// Booking request for a room priced at the factory default of 100.00 per night.
fn booking(room_id: i32, guest_id: i32, check_in: i64, check_out: i64) -> CreateReservationParams {
    CreateReservationParams {
        room_id,
        guest_id,
        check_in: days_from_today(check_in),
        check_out: days_from_today(check_out),
        amount: Decimal::from(100 * (check_out - check_in)),
        transaction_ref: format!("txn-{}-{}-{}", room_id, check_in, check_out),
        payment_status: PaymentStatus::Pending,
    }
}
