use super::*;

/// Tests linking and unlinking an amenity.
///
/// Expected: link visible through `is_linked` until removed
#[tokio::test]
async fn links_and_unlinks_amenity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let amenity = factory::create_amenity(db).await?;

    let repo = RoomTypeRepository::new(db);
    repo.link_amenity(room_type.id, amenity.id).await?;
    assert!(repo.is_linked(room_type.id, amenity.id).await?);

    assert!(repo.unlink_amenity(room_type.id, amenity.id).await?);
    assert!(!repo.is_linked(room_type.id, amenity.id).await?);

    Ok(())
}

/// Tests that the same link cannot be stored twice.
///
/// Expected: Err from the composite primary key
#[tokio::test]
async fn fails_for_duplicate_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let amenity = factory::create_amenity(db).await?;

    let repo = RoomTypeRepository::new(db);
    repo.link_amenity(room_type.id, amenity.id).await?;
    let result = repo.link_amenity(room_type.id, amenity.id).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests unlinking an amenity that was never linked.
///
/// Expected: Ok(false)
#[tokio::test]
async fn unlink_returns_false_when_not_linked() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let amenity = factory::create_amenity(db).await?;

    let removed = RoomTypeRepository::new(db)
        .unlink_amenity(room_type.id, amenity.id)
        .await?;

    assert!(!removed);

    Ok(())
}

/// Tests that a stored link resolves to both of its ends.
///
/// Expected: the link row loads with its amenity and with its room type
#[tokio::test]
async fn link_resolves_both_ends() -> Result<(), DbErr> {
    use entity::prelude::{Amenity, RoomType, RoomTypeAmenity};
    use sea_orm::EntityTrait;

    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let amenity = factory::create_amenity(db).await?;
    RoomTypeRepository::new(db)
        .link_amenity(room_type.id, amenity.id)
        .await?;

    let with_amenity = RoomTypeAmenity::find()
        .find_also_related(Amenity)
        .all(db)
        .await?;
    let with_room_type = RoomTypeAmenity::find()
        .find_also_related(RoomType)
        .all(db)
        .await?;

    assert_eq!(with_amenity.len(), 1);
    assert_eq!(with_amenity[0].1.as_ref().map(|a| a.id), Some(amenity.id));
    assert_eq!(with_room_type.len(), 1);
    assert_eq!(with_room_type[0].1.as_ref().map(|rt| rt.id), Some(room_type.id));

    Ok(())
}
