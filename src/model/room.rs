use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::room_type::RoomTypeDto;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RoomDto {
    pub id: i32,
    pub room_number: String,
    pub price: f64,
    pub status: String,
    pub room_type: RoomTypeDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A bookable room together with every calendar day (`YYYY-MM-DD`) already held
/// by an unresolved reservation.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AvailableRoomDto {
    #[serde(flatten)]
    pub room: RoomDto,
    pub reserved_dates: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateRoomDto {
    pub room_number: String,
    pub room_type_id: i32,
    pub price: f64,
    /// Defaults to `AVAILABLE`.
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateRoomDto {
    pub room_number: Option<String>,
    pub room_type_id: Option<i32>,
    pub price: Option<f64>,
    pub status: Option<String>,
}
