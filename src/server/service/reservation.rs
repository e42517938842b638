//! Reservation lifecycle.
//!
//! Booking runs as a single transaction: the room row is locked first, then price,
//! room state and availability are checked against the locked view before the
//! reservation and its initial payment are inserted. Two concurrent bookings of the
//! same room are serialized by the lock, so at most one of two overlapping requests
//! can succeed.

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        guest::GuestRepository, payment::PaymentRepository, reservation::ReservationRepository,
        room::RoomRepository,
    },
    error::{auth::AuthError, internal::InternalError, AppError},
    model::{
        auth::Caller,
        guest::Guest,
        payment::Payment,
        reservation::{
            CreateReservationParams, CreatedReservation, Reservation, ReservationDetails,
            ReservationStatus,
        },
        room::RoomStatus,
    },
    service::{
        availability::AvailabilityChecker, pricing::compute_price, room::assemble_rooms,
    },
    util::money,
};

/// Longest stay a single reservation may cover.
pub const MAX_STAY_NIGHTS: i64 = 365;

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
    #[cfg(test)]
    pause_before_insert: Option<std::time::Duration>,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            #[cfg(test)]
            pause_before_insert: None,
        }
    }

    /// Sleeps between the availability check and the insert of every booking, so
    /// tests can line concurrent bookings up inside that window.
    #[cfg(test)]
    pub(crate) fn pause_before_insert(mut self, pause: std::time::Duration) -> Self {
        self.pause_before_insert = Some(pause);
        self
    }

    /// Books a room for a guest and records the initial payment.
    ///
    /// The reservation starts `CONFIRMED` when the payment is `PAID`, `CANCELLED`
    /// when it is `FAILED` and `PENDING` otherwise. Nothing is written unless every
    /// check passes.
    ///
    /// # Returns
    /// - `Ok(CreatedReservation)` - Reservation with its payment
    /// - `Err(AppError::Validation)` - Past check-in, reversed or zero-night range,
    ///   a stay longer than `MAX_STAY_NIGHTS`, or an amount that does not match the
    ///   computed price
    /// - `Err(AppError::NotFound)` - Room or guest does not exist
    /// - `Err(AppError::Conflict)` - Room is not open for booking or the dates are taken
    pub async fn create(
        &self,
        params: CreateReservationParams,
    ) -> Result<CreatedReservation, AppError> {
        let today = Utc::now().date_naive();
        if params.check_in < today {
            return Err(AppError::Validation(
                "Check-in date cannot be in the past.".to_string(),
            ));
        }
        if params.check_in > params.check_out {
            return Err(AppError::Validation(
                "Check-in date must be before check-out date.".to_string(),
            ));
        }
        if (params.check_out - params.check_in).num_days() > MAX_STAY_NIGHTS {
            return Err(AppError::Validation(format!(
                "A reservation cannot exceed {} nights.",
                MAX_STAY_NIGHTS
            )));
        }

        let txn = self.db.begin().await?;

        let room_repo = RoomRepository::new(&txn);
        if !room_repo.lock(params.room_id).await? {
            return Err(AppError::NotFound("Room not found".to_string()));
        }
        let room = room_repo
            .find_by_id(params.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        if GuestRepository::new(&txn)
            .find_by_id(params.guest_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Guest not found".to_string()));
        }

        if room.status != RoomStatus::Available.as_str() {
            return Err(AppError::Conflict(
                "Room is not open for booking.".to_string(),
            ));
        }

        let nightly = money::to_decimal(room.price).ok_or(InternalError::InvalidAmount(room.price))?;
        let price = compute_price(nightly, params.check_in, params.check_out)?;
        if money::round(params.amount) != money::round(price) {
            return Err(AppError::Validation(format!(
                "Amount does not match the total price of {}.",
                money::round(price)
            )));
        }

        let available = AvailabilityChecker::new(&txn)
            .is_available(params.room_id, params.check_in, params.check_out)
            .await?;
        if !available {
            return Err(AppError::Conflict(
                "Room is not available for the selected dates.".to_string(),
            ));
        }

        #[cfg(test)]
        if let Some(pause) = self.pause_before_insert {
            tokio::time::sleep(pause).await;
        }

        let status = params
            .payment_status
            .forced_reservation_status()
            .unwrap_or(ReservationStatus::Pending);

        let reservation = ReservationRepository::new(&txn)
            .create(
                params.room_id,
                params.guest_id,
                params.check_in,
                params.check_out,
                status,
            )
            .await?;
        let payment = PaymentRepository::new(&txn)
            .create(
                reservation.id,
                params.transaction_ref,
                money::to_f64(price),
                params.payment_status,
            )
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Reservation {} created for room {} ({} to {})",
            reservation.id,
            reservation.room_id,
            reservation.check_in_date,
            reservation.check_out_date
        );

        Ok(CreatedReservation {
            reservation: Reservation::from_entity(reservation)?,
            payment: Payment::from_entity(payment)?,
        })
    }

    pub async fn get_all(&self) -> Result<Vec<Reservation>, AppError> {
        let reservations = ReservationRepository::new(self.db).get_all().await?;

        reservations
            .into_iter()
            .map(Reservation::from_entity)
            .collect()
    }

    /// Lists a guest's reservations, newest first. An unknown guest yields an
    /// empty list.
    pub async fn get_by_guest(&self, guest_id: i32) -> Result<Vec<Reservation>, AppError> {
        let reservations = ReservationRepository::new(self.db)
            .get_by_guest(guest_id)
            .await?;

        reservations
            .into_iter()
            .map(Reservation::from_entity)
            .collect()
    }

    /// Gets a reservation with its room, guest and payments.
    pub async fn get_details(&self, id: i32) -> Result<ReservationDetails, AppError> {
        let reservation = self.find(id).await?;

        let room_row = RoomRepository::new(self.db)
            .find_by_id_with_type(reservation.room_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!("Reservation {} references a missing room", id))
            })?;
        let room = assemble_rooms(self.db, vec![room_row])
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError(format!("Room for reservation {} not loaded", id)))?;

        let guest = GuestRepository::new(self.db)
            .find_by_id(reservation.guest_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!("Reservation {} references a missing guest", id))
            })?;

        let payments = PaymentRepository::new(self.db)
            .get_by_reservation(id)
            .await?
            .into_iter()
            .map(Payment::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ReservationDetails {
            reservation,
            room,
            guest: Guest::from_entity(guest)?,
            payments,
        })
    }

    /// Moves a reservation along its lifecycle.
    ///
    /// The read, the transition check and the write share one transaction, and the
    /// write only applies while the reservation still has the status that was
    /// checked.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Reservation with its new status
    /// - `Err(AppError::NotFound)` - No such reservation
    /// - `Err(AppError::Validation)` - The transition is not allowed
    /// - `Err(AppError::Conflict)` - The status changed while the request ran
    pub async fn update_status(
        &self,
        id: i32,
        next: ReservationStatus,
    ) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;
        let reservation = transition(&txn, id, next, None).await?;
        txn.commit().await?;

        tracing::info!("Reservation {} moved to {}", id, next.as_str());

        Ok(reservation)
    }

    /// Cancels a reservation on behalf of a caller.
    ///
    /// Guests may only cancel their own reservations.
    pub async fn cancel(&self, id: i32, caller: &Caller) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;
        let reservation =
            transition(&txn, id, ReservationStatus::Cancelled, caller.guest_id()).await?;
        txn.commit().await?;

        tracing::info!("Reservation {} cancelled", id);

        Ok(reservation)
    }

    async fn find(&self, id: i32) -> Result<Reservation, AppError> {
        let reservation = ReservationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        Reservation::from_entity(reservation)
    }
}

/// Applies one lifecycle step inside the caller's transaction.
///
/// `owner` restricts the change to reservations of that guest.
async fn transition<C: ConnectionTrait>(
    db: &C,
    id: i32,
    next: ReservationStatus,
    owner: Option<i32>,
) -> Result<Reservation, AppError> {
    let repo = ReservationRepository::new(db);
    let mut reservation = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))
        .and_then(Reservation::from_entity)?;

    if let Some(guest_id) = owner {
        if reservation.guest_id != guest_id {
            return Err(AuthError::AccessDenied {
                kind: "GUEST",
                id: guest_id,
                reason: format!("reservation {} belongs to another guest", id),
            }
            .into());
        }
    }

    if !reservation.status.can_transition_to(next) {
        return Err(AppError::Validation(format!(
            "Cannot change reservation status from {} to {}.",
            reservation.status.as_str(),
            next.as_str()
        )));
    }

    if !repo.transition_status(id, reservation.status, next).await? {
        return Err(AppError::Conflict(
            "Reservation status changed while the request was processed.".to_string(),
        ));
    }
    reservation.status = next;

    Ok(reservation)
}
