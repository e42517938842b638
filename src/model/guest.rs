use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct GuestDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Guest self-registration payload. All fields are required; they are optional
/// here so a missing field surfaces as a validation error rather than a JSON
/// rejection.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct RegisterGuestDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ActivateGuestDto {
    pub email: String,
    pub otp: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ResendOtpDto {
    pub email: String,
}
