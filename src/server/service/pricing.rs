//! Reservation pricing.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::server::error::AppError;

/// Computes the total price of a stay.
///
/// The number of nights is the whole-day difference between check-out and check-in.
/// The total is the nightly rate times the nights.
///
/// # Arguments
/// - `nightly_rate` - Room price per night
/// - `check_in` / `check_out` - Stay dates
///
/// # Returns
/// - `Ok(Decimal)` - Total price
/// - `Err(AppError::Validation)` - The stay has no nights
pub fn compute_price(
    nightly_rate: Decimal,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<Decimal, AppError> {
    let nights = (check_out - check_in).num_days();
    if nights <= 0 {
        return Err(AppError::Validation(
            "A reservation must span at least one night.".to_string(),
        ));
    }

    Ok(nightly_rate * Decimal::from(nights))
}
