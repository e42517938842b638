//! Room type domain models and parameters.
//!
//! A room type groups rooms of the same category and owns a set of amenities through
//! the `room_type_amenity` junction table.

use chrono::{DateTime, Utc};

use crate::{
    model::room_type::{CreateRoomTypeDto, RoomTypeDto, UpdateRoomTypeDto},
    server::{error::AppError, model::amenity::Amenity},
};

#[derive(Debug, Clone, PartialEq)]
pub struct RoomType {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub amenities: Vec<Amenity>,
    pub created_at: DateTime<Utc>,
}

impl RoomType {
    /// Converts a room type entity and its linked amenity entities.
    pub fn from_entity(
        entity: entity::room_type::Model,
        amenities: Vec<entity::amenity::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            amenities: amenities.into_iter().map(Amenity::from_entity).collect(),
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> RoomTypeDto {
        RoomTypeDto {
            id: self.id,
            name: self.name,
            description: self.description,
            amenities: self.amenities.into_iter().map(|a| a.into_dto()).collect(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoomTypeParams {
    pub name: String,
    pub description: Option<String>,
}

impl CreateRoomTypeParams {
    pub fn from_dto(dto: CreateRoomTypeDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Room type name is required.".to_string()));
        }

        Ok(Self {
            name,
            description: dto.description,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateRoomTypeParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateRoomTypeParams {
    pub fn from_dto(id: i32, dto: UpdateRoomTypeDto) -> Result<Self, AppError> {
        let name = dto.name.map(|n| n.trim().to_string());
        if name.as_deref() == Some("") {
            return Err(AppError::Validation(
                "Room type name cannot be empty.".to_string(),
            ));
        }

        Ok(Self {
            id,
            name,
            description: dto.description,
        })
    }
}
