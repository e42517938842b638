//! Guest domain models and parameters.
//!
//! Guests register themselves and stay `INACTIVE` until they confirm their email with
//! the OTP mailed to them.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::{
    model::guest::{GuestDto, RegisterGuestDto},
    server::error::{internal::InternalError, AppError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestStatus {
    Inactive,
    Active,
}

impl GuestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inactive => "INACTIVE",
            Self::Active => "ACTIVE",
        }
    }
}

impl FromStr for GuestStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "INACTIVE" => Ok(Self::Inactive),
            "ACTIVE" => Ok(Self::Active),
            other => Err(AppError::Validation(format!(
                "Invalid guest status '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Guest {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub status: GuestStatus,
    pub created_at: DateTime<Utc>,
}

impl Guest {
    pub fn into_dto(self) -> GuestDto {
        GuestDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a guest domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Guest)` - The converted guest
    /// - `Err(AppError::Internal(UnknownStoredValue))` - Stored status is not known
    pub fn from_entity(entity: entity::guest::Model) -> Result<Self, AppError> {
        let status = entity
            .status
            .parse::<GuestStatus>()
            .map_err(|_| InternalError::UnknownStoredValue {
                field: "guest.status",
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            password_hash: entity.password_hash,
            status,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for guest self-registration.
#[derive(Debug, Clone)]
pub struct RegisterGuestParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl RegisterGuestParams {
    /// Converts a registration request, requiring every field to be present and
    /// non-empty.
    ///
    /// # Returns
    /// - `Ok(RegisterGuestParams)` - Normalized parameters, email lowercased
    /// - `Err(AppError::Validation)` - A field is missing or blank
    pub fn from_dto(dto: RegisterGuestDto) -> Result<Self, AppError> {
        let required = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::Validation("All fields are required.".to_string()))
        };

        Ok(Self {
            first_name: required(dto.first_name)?,
            last_name: required(dto.last_name)?,
            email: required(dto.email)?.to_lowercase(),
            phone: required(dto.phone)?,
            password: dto
                .password
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AppError::Validation("All fields are required.".to_string()))?,
        })
    }
}
