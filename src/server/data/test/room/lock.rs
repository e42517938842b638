use super::*;

/// Tests locking an existing room inside a transaction.
///
/// The lock must not change any column of the row.
///
/// Expected: Ok(true) with the room unchanged
#[tokio::test]
async fn locks_existing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_type(db).await?;

    let txn = db.begin().await?;
    let locked = RoomRepository::new(&txn).lock(room.id).await?;
    txn.commit().await?;

    assert!(locked);
    let stored = RoomRepository::new(db).find_by_id(room.id).await?.unwrap();
    assert_eq!(stored.room_number, room.room_number);
    assert_eq!(stored.status, room.status);

    Ok(())
}

/// Tests locking a room that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let txn = db.begin().await?;
    let locked = RoomRepository::new(&txn).lock(42).await?;
    txn.rollback().await?;

    assert!(!locked);

    Ok(())
}
