//! Room catalog service.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::{room::RoomRepository, room_type::RoomTypeRepository},
    error::{conflict_on_unique, AppError},
    model::{
        room::{AvailableRoom, CreateRoomParams, Room, RoomStatus, UpdateRoomParams},
        room_type::RoomType,
    },
    service::availability::AvailabilityChecker,
};

const DUPLICATE_NUMBER: &str = "A room with this number already exists.";

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a room.
    ///
    /// # Returns
    /// - `Ok(Room)` - Created room with its room type
    /// - `Err(AppError::NotFound)` - Room type does not exist
    /// - `Err(AppError::Conflict)` - Room number already used
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, AppError> {
        let repo = RoomRepository::new(self.db);

        if RoomTypeRepository::new(self.db)
            .find_by_id(params.room_type_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Room type not found".to_string()));
        }
        if repo.find_by_number(&params.room_number).await?.is_some() {
            return Err(AppError::Conflict(DUPLICATE_NUMBER.to_string()));
        }

        let room = repo
            .create(params)
            .await
            .map_err(|e| conflict_on_unique(e, DUPLICATE_NUMBER))?;

        self.get_by_id(room.id).await
    }

    pub async fn get_all(&self) -> Result<Vec<Room>, AppError> {
        let rows = RoomRepository::new(self.db).get_all_with_type().await?;

        assemble_rooms(self.db, rows).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Room, AppError> {
        let row = RoomRepository::new(self.db)
            .find_by_id_with_type(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        let mut rooms = assemble_rooms(self.db, vec![row]).await?;

        rooms
            .pop()
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))
    }

    /// Applies a partial update to a room.
    ///
    /// # Returns
    /// - `Ok(Room)` - Updated room
    /// - `Err(AppError::NotFound)` - Room or new room type missing
    /// - `Err(AppError::Conflict)` - New room number already used by another room
    pub async fn update(&self, params: UpdateRoomParams) -> Result<Room, AppError> {
        let repo = RoomRepository::new(self.db);
        let id = params.id;

        if let Some(room_type_id) = params.room_type_id {
            if RoomTypeRepository::new(self.db)
                .find_by_id(room_type_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Room type not found".to_string()));
            }
        }
        if let Some(number) = &params.room_number {
            if let Some(existing) = repo.find_by_number(number).await? {
                if existing.id != id {
                    return Err(AppError::Conflict(DUPLICATE_NUMBER.to_string()));
                }
            }
        }

        repo.update(params)
            .await
            .map_err(|e| conflict_on_unique(e, DUPLICATE_NUMBER))?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        self.get_by_id(id).await
    }

    /// Deletes a room that has never been reserved.
    ///
    /// Reservations are kept as history, so a room with any reservation, cancelled
    /// or not, cannot be deleted.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = RoomRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Room not found".to_string()));
        }
        if repo.reservation_count(id).await? > 0 {
            return Err(AppError::Conflict(
                "Room has reservations and cannot be deleted.".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Lists rooms open for booking with the days already held on each.
    pub async fn get_available(&self) -> Result<Vec<AvailableRoom>, AppError> {
        let rows = RoomRepository::new(self.db)
            .get_by_status_with_type(RoomStatus::Available)
            .await?;
        let rooms = assemble_rooms(self.db, rows).await?;

        let ids: Vec<i32> = rooms.iter().map(|r| r.id).collect();
        let mut reserved = AvailabilityChecker::new(self.db)
            .reserved_dates(&ids)
            .await?;

        Ok(rooms
            .into_iter()
            .map(|room| AvailableRoom {
                reserved_dates: reserved.remove(&room.id).unwrap_or_default(),
                room,
            })
            .collect())
    }
}

/// Converts room rows joined with their room types into domain rooms, loading the
/// amenities of every involved room type in one pass.
pub(crate) async fn assemble_rooms<C: ConnectionTrait>(
    db: &C,
    rows: Vec<(entity::room::Model, Option<entity::room_type::Model>)>,
) -> Result<Vec<Room>, AppError> {
    let type_ids: Vec<i32> = rows
        .iter()
        .filter_map(|(_, room_type)| room_type.as_ref().map(|t| t.id))
        .collect();
    let amenities = RoomTypeRepository::new(db)
        .get_amenities_for(&type_ids)
        .await?;

    rows.into_iter()
        .map(|(room, room_type)| {
            let room_type = room_type.ok_or_else(|| {
                AppError::InternalError(format!("Room {} references a missing room type", room.id))
            })?;
            let linked = amenities.get(&room_type.id).cloned().unwrap_or_default();
            Room::from_entity(room, RoomType::from_entity(room_type, linked))
        })
        .collect()
}
