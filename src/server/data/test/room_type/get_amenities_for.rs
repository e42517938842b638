use super::*;
use test_utils::factory::{amenity::AmenityFactory, room_type::link_amenity};

/// Tests loading amenities for several room types at once.
///
/// Amenities are grouped by room type and sorted by name. Room types without
/// amenities are absent from the map.
///
/// Expected: Ok with two entries, amenities ordered by name
#[tokio::test]
async fn groups_amenities_by_room_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let suite = factory::create_room_type(db).await?;
    let single = factory::create_room_type(db).await?;
    let bare = factory::create_room_type(db).await?;

    let wifi = AmenityFactory::new(db).name("Wifi").build().await?;
    let balcony = AmenityFactory::new(db).name("Balcony").build().await?;

    link_amenity(db, suite.id, wifi.id).await?;
    link_amenity(db, suite.id, balcony.id).await?;
    link_amenity(db, single.id, wifi.id).await?;

    let repo = RoomTypeRepository::new(db);
    let map = repo
        .get_amenities_for(&[suite.id, single.id, bare.id])
        .await?;

    let suite_names: Vec<&str> = map[&suite.id].iter().map(|a| a.name.as_str()).collect();
    assert_eq!(suite_names, vec!["Balcony", "Wifi"]);
    assert_eq!(map[&single.id].len(), 1);
    assert!(!map.contains_key(&bare.id));

    Ok(())
}

/// Tests the single room type variant for a type without amenities.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_for_room_type_without_amenities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;

    let amenities = RoomTypeRepository::new(db)
        .get_amenities(room_type.id)
        .await?;

    assert!(amenities.is_empty());

    Ok(())
}
