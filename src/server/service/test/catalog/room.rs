use super::*;
use super::super::days_from_today;
use test_utils::factory::{reservation::ReservationFactory, room::RoomFactory};

fn room_params(room_number: &str, room_type_id: i32) -> CreateRoomParams {
    CreateRoomParams {
        room_number: room_number.to_string(),
        room_type_id,
        price: 120.0,
        status: RoomStatus::Available,
    }
}

/// Tests creating a room.
///
/// Expected: Ok with the room and its room type
#[tokio::test]
async fn creates_room_with_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;

    let room = RoomService::new(db)
        .create(room_params("301", room_type.id))
        .await?;

    assert_eq!(room.room_number, "301");
    assert_eq!(room.room_type.id, room_type.id);
    assert_eq!(room.status, RoomStatus::Available);

    Ok(())
}

/// Tests creating a room with a taken number.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_room_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let service = RoomService::new(db);
    service.create(room_params("301", room_type.id)).await?;

    let result = service.create(room_params("301", room_type.id)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests creating a room for a missing room type.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_room_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RoomService::new(db).create(room_params("301", 77)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests renaming a room to its own number.
///
/// Expected: Ok, a room does not conflict with itself
#[tokio::test]
async fn update_keeps_own_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_type(db).await?;

    let updated = RoomService::new(db)
        .update(UpdateRoomParams {
            id: room.id,
            room_number: Some(room.room_number.clone()),
            room_type_id: None,
            price: Some(95.0),
            status: None,
        })
        .await?;

    assert_eq!(updated.room_number, room.room_number);
    assert_eq!(updated.price, 95.0);

    Ok(())
}

/// Tests that a reserved room cannot be deleted.
///
/// Expected: Err(AppError::Conflict) even for a cancelled reservation
#[tokio::test]
async fn delete_rejects_reserved_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let guest = factory::create_guest(db).await?;
    ReservationFactory::new(db, room.id, guest.id)
        .status("CANCELLED")
        .build()
        .await?;

    let result = RoomService::new(db).delete(room.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests deleting a room without reservations.
///
/// Expected: Ok, then NotFound on lookup
#[tokio::test]
async fn deletes_unreserved_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_type(db).await?;
    let service = RoomService::new(db);

    service.delete(room.id).await?;

    assert!(matches!(
        service.get_by_id(room.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests the public availability listing.
///
/// Only rooms open for booking are listed, each with the sorted days held by
/// blocking reservations.
///
/// Expected: Ok with one room and its three held days
#[tokio::test]
async fn lists_available_rooms_with_reserved_dates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room_type, room) = factory::helpers::create_room_with_type(db).await?;
    RoomFactory::new(db, room_type.id)
        .status("MAINTENANCE")
        .build()
        .await?;
    let guest = factory::create_guest(db).await?;
    ReservationFactory::new(db, room.id, guest.id)
        .dates(days_from_today(3), days_from_today(5))
        .build()
        .await?;
    ReservationFactory::new(db, room.id, guest.id)
        .dates(days_from_today(8), days_from_today(9))
        .status("CANCELLED")
        .build()
        .await?;

    let available = RoomService::new(db).get_available().await?;

    assert_eq!(available.len(), 1);
    assert_eq!(available[0].room.id, room.id);
    let expected: Vec<String> = (3..=5)
        .map(|d| days_from_today(d).format("%Y-%m-%d").to_string())
        .collect();
    assert_eq!(available[0].reserved_dates, expected);

    Ok(())
}
