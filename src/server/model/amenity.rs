use chrono::{DateTime, Utc};

use crate::{
    model::amenity::{AmenityDto, CreateAmenityDto, UpdateAmenityDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Amenity {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Amenity {
    pub fn from_entity(entity: entity::amenity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AmenityDto {
        AmenityDto {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAmenityParams {
    pub name: String,
    pub description: Option<String>,
}

impl CreateAmenityParams {
    pub fn from_dto(dto: CreateAmenityDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Amenity name is required.".to_string()));
        }

        Ok(Self {
            name,
            description: dto.description,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateAmenityParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateAmenityParams {
    pub fn from_dto(id: i32, dto: UpdateAmenityDto) -> Result<Self, AppError> {
        let name = dto.name.map(|n| n.trim().to_string());
        if name.as_deref() == Some("") {
            return Err(AppError::Validation("Amenity name cannot be empty.".to_string()));
        }

        Ok(Self {
            id,
            name,
            description: dto.description,
        })
    }
}
