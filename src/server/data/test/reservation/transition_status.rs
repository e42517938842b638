use super::*;

/// Tests moving a reservation out of the status it is in.
///
/// Expected: Ok(true) and the new status stored
#[tokio::test]
async fn moves_from_current_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let moved = repo
        .transition_status(
            reservation.id,
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
        )
        .await?;

    assert!(moved);
    let stored = repo.find_by_id(reservation.id).await?.unwrap();
    assert_eq!(stored.status, "CONFIRMED");

    Ok(())
}

/// Tests a transition whose starting status is stale.
///
/// Another writer already moved the reservation, so the change must not apply.
///
/// Expected: Ok(false) and the other writer's status kept
#[tokio::test]
async fn skips_when_status_changed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    repo.set_status(reservation.id, ReservationStatus::Cancelled)
        .await?;
    let moved = repo
        .transition_status(
            reservation.id,
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
        )
        .await?;

    assert!(!moved);
    let stored = repo.find_by_id(reservation.id).await?.unwrap();
    assert_eq!(stored.status, "CANCELLED");

    Ok(())
}
