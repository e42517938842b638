use sea_orm::DatabaseConnection;

use crate::server::{
    data::amenity::AmenityRepository,
    error::{conflict_on_unique, AppError},
    model::amenity::{Amenity, CreateAmenityParams, UpdateAmenityParams},
};

const DUPLICATE_NAME: &str = "An amenity with this name already exists.";

pub struct AmenityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AmenityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an amenity with a unique name.
    pub async fn create(&self, params: CreateAmenityParams) -> Result<Amenity, AppError> {
        let repo = AmenityRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict(DUPLICATE_NAME.to_string()));
        }

        let amenity = repo
            .create(params)
            .await
            .map_err(|e| conflict_on_unique(e, DUPLICATE_NAME))?;

        Ok(Amenity::from_entity(amenity))
    }

    pub async fn get_all(&self) -> Result<Vec<Amenity>, AppError> {
        let amenities = AmenityRepository::new(self.db).get_all().await?;

        Ok(amenities.into_iter().map(Amenity::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Amenity, AppError> {
        AmenityRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(Amenity::from_entity)
            .ok_or_else(|| AppError::NotFound("Amenity not found".to_string()))
    }

    /// Updates an amenity, keeping names unique.
    pub async fn update(&self, params: UpdateAmenityParams) -> Result<Amenity, AppError> {
        let repo = AmenityRepository::new(self.db);

        if let Some(name) = &params.name {
            if let Some(existing) = repo.find_by_name(name).await? {
                if existing.id != params.id {
                    return Err(AppError::Conflict(DUPLICATE_NAME.to_string()));
                }
            }
        }

        repo.update(params)
            .await
            .map_err(|e| conflict_on_unique(e, DUPLICATE_NAME))?
            .map(Amenity::from_entity)
            .ok_or_else(|| AppError::NotFound("Amenity not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AmenityRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Amenity not found".to_string()));
        }

        Ok(())
    }
}
