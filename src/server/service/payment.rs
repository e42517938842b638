//! Payments and their effect on reservations.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{payment::PaymentRepository, reservation::ReservationRepository, room::RoomRepository},
    error::AppError,
    model::{
        payment::{Payment, PaymentStatus, PaymentStatusUpdate},
        reservation::Reservation,
    },
    service::availability::AvailabilityChecker,
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Payment>, AppError> {
        let payments = PaymentRepository::new(self.db).get_all().await?;

        payments.into_iter().map(Payment::from_entity).collect()
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Payment, AppError> {
        let payment = PaymentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        Payment::from_entity(payment)
    }

    /// Sets a payment's status and carries the outcome over to its reservation.
    ///
    /// `PAID` confirms and `FAILED` cancels the reservation regardless of its
    /// current status. `PENDING` leaves it untouched. Both rows change in one
    /// transaction.
    ///
    /// Confirming a reservation that no longer holds its room (cancelled or checked
    /// out) takes the room lock and requires its dates to be free again.
    ///
    /// # Returns
    /// - `Ok(PaymentStatusUpdate)` - Updated payment and the reservation's status
    /// - `Err(AppError::NotFound)` - No such payment
    /// - `Err(AppError::Conflict)` - The released dates have been booked since
    pub async fn update_status(
        &self,
        id: i32,
        status: PaymentStatus,
    ) -> Result<PaymentStatusUpdate, AppError> {
        let txn = self.db.begin().await?;

        let payment_repo = PaymentRepository::new(&txn);
        let reservation_repo = ReservationRepository::new(&txn);

        let payment = payment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        let forced = status.forced_reservation_status();
        if forced.is_some_and(|next| next.blocks_room()) {
            let reservation = reservation_repo
                .find_by_id(payment.reservation_id)
                .await?
                .ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Payment {} references a missing reservation",
                        id
                    ))
                })
                .and_then(Reservation::from_entity)?;

            if !reservation.status.blocks_room() {
                RoomRepository::new(&txn).lock(reservation.room_id).await?;

                let available = AvailabilityChecker::new(&txn)
                    .is_available(
                        reservation.room_id,
                        reservation.check_in,
                        reservation.check_out,
                    )
                    .await?;
                if !available {
                    return Err(AppError::Conflict(format!(
                        "Reservation {} cannot be confirmed, its room has been booked for those dates.",
                        reservation.id
                    )));
                }
            }
        }

        payment_repo.set_status(id, status).await?;
        if let Some(forced) = forced {
            reservation_repo
                .set_status(payment.reservation_id, forced)
                .await?;
        }

        let payment = payment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;
        let reservation = reservation_repo
            .find_by_id(payment.reservation_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!("Payment {} references a missing reservation", id))
            })?;

        txn.commit().await?;

        tracing::info!("Payment {} marked {}", id, status.as_str());

        Ok(PaymentStatusUpdate {
            payment: Payment::from_entity(payment)?,
            reservation_status: Reservation::from_entity(reservation)?.status,
        })
    }
}
