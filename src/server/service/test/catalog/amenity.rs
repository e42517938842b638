use super::*;
use crate::server::model::amenity::UpdateAmenityParams;

/// Tests renaming an amenity to a name another amenity holds.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn update_rejects_taken_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AmenityService::new(db);
    service
        .create(CreateAmenityParams {
            name: "Minibar".to_string(),
            description: None,
        })
        .await?;
    let other = service
        .create(CreateAmenityParams {
            name: "Safe".to_string(),
            description: Some("In-room safe".to_string()),
        })
        .await?;

    let result = service
        .update(UpdateAmenityParams {
            id: other.id,
            name: Some("Minibar".to_string()),
            description: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests deleting an amenity that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn delete_rejects_missing_amenity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AmenityService::new(db).delete(3).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
