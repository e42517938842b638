use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UserDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateUserDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    /// One of `ADMIN`, `ROOM_MANAGER`, `RECEPTIONIST`.
    pub role: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UpdateUserStatusDto {
    /// `ACTIVE` or `BLOCKED`.
    pub status: String,
}
