use super::*;

/// Tests a partial update.
///
/// Only the provided fields change and `updated_at` moves forward.
///
/// Expected: Ok(Some) with new price and status, same number and type
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (room_type, room) = factory::helpers::create_room_with_type(db).await?;

    let repo = RoomRepository::new(db);
    let updated = repo
        .update(UpdateRoomParams {
            id: room.id,
            room_number: None,
            room_type_id: None,
            price: Some(180.5),
            status: Some(RoomStatus::Maintenance),
        })
        .await?
        .unwrap();

    assert_eq!(updated.room_number, room.room_number);
    assert_eq!(updated.room_type_id, room_type.id);
    assert_eq!(updated.price, 180.5);
    assert_eq!(updated.status, "MAINTENANCE");
    assert!(updated.updated_at >= room.updated_at);

    Ok(())
}

/// Tests updating a room that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let updated = repo
        .update(UpdateRoomParams {
            id: 7,
            room_number: Some("701".to_string()),
            room_type_id: None,
            price: None,
            status: None,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
