use super::*;
use test_utils::factory::reservation::ReservationFactory;

/// Tests that reservations of every status are counted.
///
/// Expected: Ok(2) for one pending and one cancelled reservation
#[tokio::test]
async fn counts_reservations_of_any_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let guest = factory::create_guest(db).await?;

    factory::create_reservation(db, room.id, guest.id).await?;
    ReservationFactory::new(db, room.id, guest.id)
        .status("CANCELLED")
        .build()
        .await?;

    let count = RoomRepository::new(db).reservation_count(room.id).await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests counting for a room that was never booked.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_type(db).await?;

    let count = RoomRepository::new(db).reservation_count(room.id).await?;

    assert_eq!(count, 0);

    Ok(())
}
