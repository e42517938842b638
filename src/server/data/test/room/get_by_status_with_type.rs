use super::*;
use test_utils::factory::room::RoomFactory;

/// Tests filtering rooms by status.
///
/// Each returned room carries its room type and rooms come back ordered by
/// room number.
///
/// Expected: Ok with the two available rooms
#[tokio::test]
async fn returns_rooms_in_status_with_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    RoomFactory::new(db, room_type.id)
        .room_number("202")
        .build()
        .await?;
    RoomFactory::new(db, room_type.id)
        .room_number("101")
        .build()
        .await?;
    RoomFactory::new(db, room_type.id)
        .room_number("150")
        .status("MAINTENANCE")
        .build()
        .await?;

    let rows = RoomRepository::new(db)
        .get_by_status_with_type(RoomStatus::Available)
        .await?;

    let numbers: Vec<&str> = rows.iter().map(|(r, _)| r.room_number.as_str()).collect();
    assert_eq!(numbers, vec!["101", "202"]);
    assert!(rows
        .iter()
        .all(|(_, t)| t.as_ref().map(|t| t.id) == Some(room_type.id)));

    Ok(())
}
