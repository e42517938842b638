use super::*;

/// Tests a guest cancelling its own reservation.
///
/// Expected: Ok with status CANCELLED
#[tokio::test]
async fn guest_cancels_own_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, guest, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let caller = Caller::Guest(Guest::from_entity(guest)?);

    let cancelled = ReservationService::new(db)
        .cancel(reservation.id, &caller)
        .await?;

    assert_eq!(cancelled.status, ReservationStatus::Cancelled);

    Ok(())
}

/// Tests a guest trying to cancel someone else's reservation.
///
/// Expected: Err(AuthError::AccessDenied) and status unchanged
#[tokio::test]
async fn guest_cannot_cancel_foreign_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let stranger = factory::create_guest(db).await?;
    let caller = Caller::Guest(Guest::from_entity(stranger)?);

    let result = ReservationService::new(db)
        .cancel(reservation.id, &caller)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));
    let stored = Reservation::find_by_id(reservation.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "PENDING");

    Ok(())
}

/// Tests that a checked-in stay can no longer be cancelled.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn cannot_cancel_checked_in_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, guest, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let service = ReservationService::new(db);
    service
        .update_status(reservation.id, ReservationStatus::Confirmed)
        .await?;
    service
        .update_status(reservation.id, ReservationStatus::CheckedIn)
        .await?;

    let caller = Caller::Guest(Guest::from_entity(guest)?);
    let result = service.cancel(reservation.id, &caller).await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
