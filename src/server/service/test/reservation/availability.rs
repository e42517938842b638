use super::*;
use test_utils::factory::reservation::ReservationFactory;

/// Tests that overlapping stays on the same room conflict.
///
/// Expected: Err(AppError::Conflict) for the second booking
#[tokio::test]
async fn rejects_overlapping_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let guest = factory::create_guest(db).await?;
    let service = ReservationService::new(db);

    service.create(booking(room.id, guest.id, 3, 7)).await?;
    let result = service.create(booking(room.id, guest.id, 5, 9)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that checking in on another stay's check-out day conflicts.
///
/// Both ends of a stay are occupied days.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_same_day_turnover() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let guest = factory::create_guest(db).await?;
    let service = ReservationService::new(db);

    service.create(booking(room.id, guest.id, 3, 5)).await?;
    let result = service.create(booking(room.id, guest.id, 5, 7)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that stays separated by a free day do not conflict.
///
/// Expected: Ok for both bookings
#[tokio::test]
async fn accepts_adjacent_booking_after_gap() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let guest = factory::create_guest(db).await?;
    let service = ReservationService::new(db);

    service.create(booking(room.id, guest.id, 3, 5)).await?;
    let second = service.create(booking(room.id, guest.id, 6, 8)).await;

    assert!(second.is_ok());

    Ok(())
}

/// Tests that cancelled and checked-out reservations release their days.
///
/// Expected: Ok for a booking over the released days
#[tokio::test]
async fn released_reservations_do_not_block() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let guest = factory::create_guest(db).await?;

    ReservationFactory::new(db, room.id, guest.id)
        .dates(days_from_today(2), days_from_today(4))
        .status("CANCELLED")
        .build()
        .await?;
    ReservationFactory::new(db, room.id, guest.id)
        .dates(days_from_today(4), days_from_today(6))
        .status("CHECKED_OUT")
        .build()
        .await?;

    let result = ReservationService::new(db)
        .create(booking(room.id, guest.id, 2, 6))
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that the same dates on a different room are free.
///
/// Expected: Ok
#[tokio::test]
async fn other_rooms_are_independent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room_type, first) = factory::helpers::create_room_with_type(db).await?;
    let second = factory::create_room(db, room_type.id).await?;
    let guest = factory::create_guest(db).await?;
    let service = ReservationService::new(db);

    service.create(booking(first.id, guest.id, 1, 4)).await?;
    let result = service.create(booking(second.id, guest.id, 1, 4)).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests two concurrent bookings of the same room and overlapping dates.
///
/// Runs on a file database with several connections so both transactions are
/// open at once. Each booking pauses between its availability check and its
/// insert; without the room lock both would pass the check before either
/// inserts.
///
/// Expected: one Ok, one Err(AppError::Conflict), one reservation stored
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_bookings_allow_only_one() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .with_file_database(4)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let first_guest = factory::create_guest(db).await?;
    let second_guest = factory::create_guest(db).await?;

    let pause = std::time::Duration::from_millis(300);
    let first = ReservationService::new(db).pause_before_insert(pause);
    let second = ReservationService::new(db).pause_before_insert(pause);
    let (a, b) = tokio::join!(
        first.create(booking(room.id, first_guest.id, 2, 4)),
        second.create(booking(room.id, second_guest.id, 3, 5)),
    );

    let succeeded = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    let conflicts = [&a, &b]
        .iter()
        .filter(|r| matches!(r, Err(AppError::Conflict(_))))
        .count();

    assert_eq!(succeeded, 1);
    assert_eq!(conflicts, 1);
    assert_eq!(Reservation::find().count(db).await?, 1);
    assert_eq!(Payment::find().count(db).await?, 1);

    Ok(())
}

/// Tests concurrent bookings of different rooms on a shared database.
///
/// Locking one room never turns away a booking of another room.
///
/// Expected: Ok for both bookings
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_bookings_of_different_rooms_both_succeed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .with_file_database(4)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room_type, first_room) = factory::helpers::create_room_with_type(db).await?;
    let second_room = factory::create_room(db, room_type.id).await?;
    let guest = factory::create_guest(db).await?;

    let pause = std::time::Duration::from_millis(100);
    let first = ReservationService::new(db).pause_before_insert(pause);
    let second = ReservationService::new(db).pause_before_insert(pause);
    let (a, b) = tokio::join!(
        first.create(booking(first_room.id, guest.id, 2, 4)),
        second.create(booking(second_room.id, guest.id, 2, 4)),
    );

    assert!(a.is_ok());
    assert!(b.is_ok());
    assert_eq!(Reservation::find().count(db).await?, 2);

    Ok(())
}
