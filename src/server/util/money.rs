//! Monetary conversions.
//!
//! Amounts are stored and serialized as `f64` but every calculation and comparison
//! goes through `Decimal`, rounded half away from zero to two decimal places.

use rust_decimal::prelude::*;

const DECIMAL_PLACES: u32 = 2;

/// Converts an `f64` amount to `Decimal`, `None` for NaN or infinite input.
pub fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value)
}

/// Rounds to two decimal places, half away from zero.
pub fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a `Decimal` back to `f64` for storage, rounded to two decimal places.
pub fn to_f64(value: Decimal) -> f64 {
    round(value).to_f64().unwrap_or_default()
}
