//! Room domain models and parameters.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::{
    model::room::{AvailableRoomDto, CreateRoomDto, RoomDto, UpdateRoomDto},
    server::{
        error::{internal::InternalError, AppError},
        model::room_type::RoomType,
    },
};

/// Operational status of a room. Only `Available` rooms accept new bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    Available,
    Unavailable,
    Maintenance,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Unavailable => "UNAVAILABLE",
            Self::Maintenance => "MAINTENANCE",
        }
    }
}

impl FromStr for RoomStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "AVAILABLE" => Ok(Self::Available),
            "UNAVAILABLE" => Ok(Self::Unavailable),
            "MAINTENANCE" => Ok(Self::Maintenance),
            other => Err(AppError::Validation(format!(
                "Invalid room status '{}', expected AVAILABLE, UNAVAILABLE or MAINTENANCE",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub room_number: String,
    /// Nightly rate.
    pub price: f64,
    pub status: RoomStatus,
    pub room_type: RoomType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Converts a room entity together with its already converted room type.
    ///
    /// # Returns
    /// - `Ok(Room)` - The converted room
    /// - `Err(AppError::Internal(UnknownStoredValue))` - Stored status is not known
    pub fn from_entity(entity: entity::room::Model, room_type: RoomType) -> Result<Self, AppError> {
        let status = entity
            .status
            .parse::<RoomStatus>()
            .map_err(|_| InternalError::UnknownStoredValue {
                field: "room.status",
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            room_number: entity.room_number,
            price: entity.price,
            status,
            room_type,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            room_number: self.room_number,
            price: self.price,
            status: self.status.as_str().to_string(),
            room_type: self.room_type.into_dto(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A bookable room and the days already held by unresolved reservations.
#[derive(Debug, Clone)]
pub struct AvailableRoom {
    pub room: Room,
    pub reserved_dates: Vec<String>,
}

impl AvailableRoom {
    pub fn into_dto(self) -> AvailableRoomDto {
        AvailableRoomDto {
            room: self.room.into_dto(),
            reserved_dates: self.reserved_dates,
        }
    }
}

fn validate_price(price: f64) -> Result<f64, AppError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::Validation(
            "Room price must be greater than zero.".to_string(),
        ));
    }
    Ok(price)
}

#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub room_number: String,
    pub room_type_id: i32,
    pub price: f64,
    pub status: RoomStatus,
}

impl CreateRoomParams {
    pub fn from_dto(dto: CreateRoomDto) -> Result<Self, AppError> {
        let room_number = dto.room_number.trim().to_string();
        if room_number.is_empty() {
            return Err(AppError::Validation("Room number is required.".to_string()));
        }

        let status = match dto.status {
            Some(status) => status.trim().parse()?,
            None => RoomStatus::Available,
        };

        Ok(Self {
            room_number,
            room_type_id: dto.room_type_id,
            price: validate_price(dto.price)?,
            status,
        })
    }
}

/// Partial room update; `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateRoomParams {
    pub id: i32,
    pub room_number: Option<String>,
    pub room_type_id: Option<i32>,
    pub price: Option<f64>,
    pub status: Option<RoomStatus>,
}

impl UpdateRoomParams {
    pub fn from_dto(id: i32, dto: UpdateRoomDto) -> Result<Self, AppError> {
        let room_number = dto.room_number.map(|n| n.trim().to_string());
        if room_number.as_deref() == Some("") {
            return Err(AppError::Validation("Room number cannot be empty.".to_string()));
        }

        Ok(Self {
            id,
            room_number,
            room_type_id: dto.room_type_id,
            price: dto.price.map(validate_price).transpose()?,
            status: dto.status.map(|s| s.trim().parse()).transpose()?,
        })
    }
}
