use sea_orm::DatabaseConnection;

use crate::server::{
    data::{amenity::AmenityRepository, room_type::RoomTypeRepository},
    error::{conflict_on_unique, AppError},
    model::{
        amenity::Amenity,
        room_type::{CreateRoomTypeParams, RoomType, UpdateRoomTypeParams},
    },
};

const DUPLICATE_NAME: &str = "A room type with this name already exists.";

pub struct RoomTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a room type with a unique name and no amenities.
    pub async fn create(&self, params: CreateRoomTypeParams) -> Result<RoomType, AppError> {
        let repo = RoomTypeRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict(DUPLICATE_NAME.to_string()));
        }

        let room_type = repo
            .create(params)
            .await
            .map_err(|e| conflict_on_unique(e, DUPLICATE_NAME))?;

        Ok(RoomType::from_entity(room_type, Vec::new()))
    }

    /// Gets all room types with their amenities.
    pub async fn get_all(&self) -> Result<Vec<RoomType>, AppError> {
        let repo = RoomTypeRepository::new(self.db);

        let room_types = repo.get_all().await?;
        let ids: Vec<i32> = room_types.iter().map(|t| t.id).collect();
        let mut amenities = repo.get_amenities_for(&ids).await?;

        Ok(room_types
            .into_iter()
            .map(|t| {
                let linked = amenities.remove(&t.id).unwrap_or_default();
                RoomType::from_entity(t, linked)
            })
            .collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<RoomType, AppError> {
        let repo = RoomTypeRepository::new(self.db);

        let room_type = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room type not found".to_string()))?;
        let amenities = repo.get_amenities(id).await?;

        Ok(RoomType::from_entity(room_type, amenities))
    }

    /// Updates a room type, keeping names unique.
    pub async fn update(&self, params: UpdateRoomTypeParams) -> Result<RoomType, AppError> {
        let repo = RoomTypeRepository::new(self.db);
        let id = params.id;

        if let Some(name) = &params.name {
            if let Some(existing) = repo.find_by_name(name).await? {
                if existing.id != id {
                    return Err(AppError::Conflict(DUPLICATE_NAME.to_string()));
                }
            }
        }

        let room_type = repo
            .update(params)
            .await
            .map_err(|e| conflict_on_unique(e, DUPLICATE_NAME))?
            .ok_or_else(|| AppError::NotFound("Room type not found".to_string()))?;
        let amenities = repo.get_amenities(id).await?;

        Ok(RoomType::from_entity(room_type, amenities))
    }

    /// Deletes a room type that no room uses.
    ///
    /// # Returns
    /// - `Ok(())` - Deleted along with its amenity links
    /// - `Err(AppError::NotFound)` - No such room type
    /// - `Err(AppError::Conflict)` - Rooms still reference the room type
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = RoomTypeRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Room type not found".to_string()));
        }
        if repo.room_count(id).await? > 0 {
            return Err(AppError::Conflict(
                "Room type is assigned to rooms and cannot be deleted.".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Lists the amenities of a room type.
    pub async fn get_amenities(&self, room_type_id: i32) -> Result<Vec<Amenity>, AppError> {
        let repo = RoomTypeRepository::new(self.db);

        if repo.find_by_id(room_type_id).await?.is_none() {
            return Err(AppError::NotFound("Room type not found".to_string()));
        }

        let amenities = repo.get_amenities(room_type_id).await?;

        Ok(amenities.into_iter().map(Amenity::from_entity).collect())
    }

    /// Links an amenity to a room type.
    ///
    /// # Returns
    /// - `Ok(RoomType)` - Room type with its updated amenities
    /// - `Err(AppError::NotFound)` - Room type or amenity missing
    /// - `Err(AppError::Conflict)` - Already linked
    pub async fn link_amenity(
        &self,
        room_type_id: i32,
        amenity_id: i32,
    ) -> Result<RoomType, AppError> {
        let repo = RoomTypeRepository::new(self.db);

        if repo.find_by_id(room_type_id).await?.is_none() {
            return Err(AppError::NotFound("Room type not found".to_string()));
        }
        if AmenityRepository::new(self.db)
            .find_by_id(amenity_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Amenity not found".to_string()));
        }
        if repo.is_linked(room_type_id, amenity_id).await? {
            return Err(AppError::Conflict(
                "Amenity is already linked to this room type.".to_string(),
            ));
        }

        repo.link_amenity(room_type_id, amenity_id).await?;

        self.get_by_id(room_type_id).await
    }

    /// Removes an amenity from a room type.
    pub async fn unlink_amenity(
        &self,
        room_type_id: i32,
        amenity_id: i32,
    ) -> Result<RoomType, AppError> {
        let repo = RoomTypeRepository::new(self.db);

        if !repo.unlink_amenity(room_type_id, amenity_id).await? {
            return Err(AppError::NotFound(
                "Amenity is not linked to this room type".to_string(),
            ));
        }

        self.get_by_id(room_type_id).await
    }
}
