//! Room availability.
//!
//! A room is unavailable for a date range when any calendar day of the range is also
//! occupied by a reservation that still holds the room. Both ranges include their
//! check-in and check-out days, so a reservation checking out on the 10th conflicts
//! with one checking in on the 10th.

use chrono::{NaiveDate, Utc};
use sea_orm::ConnectionTrait;
use std::collections::{BTreeSet, HashMap};

use crate::server::{
    data::reservation::ReservationRepository,
    error::AppError,
    util::date_range::{enumerate_days, ranges_overlap},
};

pub struct AvailabilityChecker<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvailabilityChecker<'a, C> {
    /// Creates a checker reading through `db`. Pass the booking transaction to make
    /// the check part of the same atomic unit as the insert.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether a room is free for every day of a candidate range.
    ///
    /// Considers reservations that block the room and check out today or later.
    ///
    /// # Arguments
    /// - `room_id` - Room to check
    /// - `check_in` / `check_out` - Candidate range, both days inclusive
    ///
    /// # Returns
    /// - `Ok(true)` - No occupied day overlaps the candidate range
    /// - `Ok(false)` - At least one day is already taken
    /// - `Err(AppError)` - Database error
    pub async fn is_available(
        &self,
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<bool, AppError> {
        let today = Utc::now().date_naive();
        let existing = ReservationRepository::new(self.db)
            .get_blocking_for_rooms(&[room_id], today)
            .await?;

        let conflict = existing.iter().any(|reservation| {
            ranges_overlap(
                check_in,
                check_out,
                reservation.check_in_date,
                reservation.check_out_date,
            )
        });

        Ok(!conflict)
    }

    /// Lists the days already held on each of the given rooms.
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Sorted, de-duplicated `YYYY-MM-DD` days keyed by room id.
    ///   Rooms with no held days map to an empty list.
    /// - `Err(AppError)` - Database error
    pub async fn reserved_dates(
        &self,
        room_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<String>>, AppError> {
        let today = Utc::now().date_naive();
        let existing = ReservationRepository::new(self.db)
            .get_blocking_for_rooms(room_ids, today)
            .await?;

        let mut days: HashMap<i32, BTreeSet<String>> =
            room_ids.iter().map(|id| (*id, BTreeSet::new())).collect();
        for reservation in existing {
            days.entry(reservation.room_id)
                .or_default()
                .extend(enumerate_days(
                    reservation.check_in_date,
                    reservation.check_out_date,
                ));
        }

        Ok(days
            .into_iter()
            .map(|(room_id, set)| (room_id, set.into_iter().collect()))
            .collect())
    }
}
