use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::amenity::AmenityDto;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RoomTypeDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub amenities: Vec<AmenityDto>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateRoomTypeDto {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateRoomTypeDto {
    pub name: Option<String>,
    pub description: Option<String>,
}
