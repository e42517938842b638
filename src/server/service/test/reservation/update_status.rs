use super::*;
use test_utils::factory::reservation::ReservationFactory;

/// Tests walking a reservation through its normal lifecycle.
///
/// Expected: Ok for PENDING -> CONFIRMED -> CHECKED_IN -> CHECKED_OUT
#[tokio::test]
async fn follows_lifecycle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let service = ReservationService::new(db);

    for next in [
        ReservationStatus::Confirmed,
        ReservationStatus::CheckedIn,
        ReservationStatus::CheckedOut,
    ] {
        let updated = service.update_status(reservation.id, next).await?;
        assert_eq!(updated.status, next);
    }

    let stored = Reservation::find_by_id(reservation.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "CHECKED_OUT");

    Ok(())
}

/// Tests transitions the table does not allow.
///
/// Expected: Err(AppError::Validation) and status unchanged
#[tokio::test]
async fn rejects_invalid_transitions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room, guest, pending) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let checked_out = ReservationFactory::new(db, room.id, guest.id)
        .status("CHECKED_OUT")
        .build()
        .await?;
    let service = ReservationService::new(db);

    let skip = service
        .update_status(pending.id, ReservationStatus::CheckedIn)
        .await;
    let reopen = service
        .update_status(checked_out.id, ReservationStatus::Pending)
        .await;

    assert!(matches!(skip, Err(AppError::Validation(_))));
    assert!(matches!(reopen, Err(AppError::Validation(_))));
    let stored = Reservation::find_by_id(pending.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "PENDING");

    Ok(())
}

/// Tests updating a reservation that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ReservationService::new(db)
        .update_status(99, ReservationStatus::Confirmed)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests two concurrent transitions out of the same status.
///
/// Check-in and cancellation both start from `CONFIRMED`; whichever lands first
/// leaves the other one with a status it cannot move from.
///
/// Expected: exactly one Ok, and the stored status is the one it set
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_transitions_apply_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .with_file_database(4)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room, guest, _) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let confirmed = ReservationFactory::new(db, room.id, guest.id)
        .dates(days_from_today(20), days_from_today(22))
        .status("CONFIRMED")
        .build()
        .await?;

    let first = ReservationService::new(db);
    let second = ReservationService::new(db);
    let (check_in, cancel) = tokio::join!(
        first.update_status(confirmed.id, ReservationStatus::CheckedIn),
        second.update_status(confirmed.id, ReservationStatus::Cancelled),
    );

    let applied: Vec<_> = [check_in, cancel].into_iter().filter_map(Result::ok).collect();
    assert_eq!(applied.len(), 1);

    let stored = Reservation::find_by_id(confirmed.id).one(db).await?.unwrap();
    assert_eq!(stored.status, applied[0].status.as_str());

    Ok(())
}
