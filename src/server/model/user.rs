//! Staff user domain models and parameters.
//!
//! Staff users operate the hotel: admins manage accounts and audit logs, room managers
//! maintain the catalog and receptionists handle bookings and payments. Guests are
//! modelled separately in `guest`.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::error::{internal::InternalError, AppError},
};

/// Authorization role of a caller.
///
/// `Guest` is never stored on a staff account; it is the implicit role of every
/// authenticated guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    RoomManager,
    Receptionist,
    Guest,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::RoomManager => "ROOM_MANAGER",
            Self::Receptionist => "RECEPTIONIST",
            Self::Guest => "GUEST",
        }
    }

    /// Staff roles in display order.
    pub const STAFF: [Role; 3] = [Role::Admin, Role::RoomManager, Role::Receptionist];
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ADMIN" => Ok(Self::Admin),
            "ROOM_MANAGER" => Ok(Self::RoomManager),
            "RECEPTIONIST" => Ok(Self::Receptionist),
            "GUEST" => Ok(Self::Guest),
            other => Err(AppError::Validation(format!("Invalid role '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Blocked,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Blocked => "BLOCKED",
        }
    }
}

impl FromStr for UserStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ACTIVE" => Ok(Self::Active),
            "BLOCKED" => Ok(Self::Blocked),
            other => Err(AppError::Validation(format!(
                "Invalid user status '{}', expected ACTIVE or BLOCKED",
                other
            ))),
        }
    }
}

/// Staff account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Argon2 PHC string. Never leaves the server.
    pub password_hash: String,
    pub role: Role,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            role: self.role.as_str().to_string(),
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::Internal(UnknownStoredValue))` - Stored role or status is not
    ///   a known value
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = entity
            .role
            .parse::<Role>()
            .ok()
            .filter(|role| *role != Role::Guest)
            .ok_or_else(|| InternalError::UnknownStoredValue {
                field: "user.role",
                value: entity.role.clone(),
            })?;
        let status = entity
            .status
            .parse::<UserStatus>()
            .map_err(|_| InternalError::UnknownStoredValue {
                field: "user.status",
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            password_hash: entity.password_hash,
            role,
            status,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating a staff account. The password is plain text and is hashed
/// by the service.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
}

impl CreateUserParams {
    /// Validates and converts a creation request.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - All fields present and the role is a staff role
    /// - `Err(AppError::Validation)` - Empty field or invalid role
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        let role = dto.role.trim().parse::<Role>()?;
        if role == Role::Guest {
            return Err(AppError::Validation(
                "Staff accounts cannot have the GUEST role".to_string(),
            ));
        }

        let fields = [
            &dto.first_name,
            &dto.last_name,
            &dto.email,
            &dto.phone,
            &dto.password,
        ];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(AppError::Validation("All fields are required.".to_string()));
        }

        Ok(Self {
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            phone: dto.phone.trim().to_string(),
            password: dto.password,
            role,
        })
    }
}
