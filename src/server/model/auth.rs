//! The authenticated caller of a request.

use crate::{
    model::auth::{CallerDto, ResetPasswordDto, UpdateProfileDto},
    server::{
        error::AppError,
        model::{
            audit::{Actor, ActorKind},
            guest::Guest,
            user::{Role, User},
        },
    },
};

/// Identity resolved from the session by `AuthGuard`.
#[derive(Debug, Clone)]
pub enum Caller {
    Staff(User),
    Guest(Guest),
}

impl Caller {
    pub fn role(&self) -> Role {
        match self {
            Self::Staff(user) => user.role,
            Self::Guest(_) => Role::Guest,
        }
    }

    /// The audit actor this caller's actions are attributed to.
    pub fn actor(&self) -> Actor {
        match self {
            Self::Staff(user) => Actor {
                kind: ActorKind::User,
                id: user.id,
            },
            Self::Guest(guest) => Actor {
                kind: ActorKind::Guest,
                id: guest.id,
            },
        }
    }

    /// Staff user id when the caller is a staff user.
    pub fn user_id(&self) -> Option<i32> {
        match self {
            Self::Staff(user) => Some(user.id),
            Self::Guest(_) => None,
        }
    }

    /// Guest id when the caller is a guest.
    pub fn guest_id(&self) -> Option<i32> {
        match self {
            Self::Guest(guest) => Some(guest.id),
            Self::Staff(_) => None,
        }
    }

    pub fn into_dto(self) -> CallerDto {
        let role = self.role().as_str().to_string();
        match self {
            Self::Staff(user) => CallerDto {
                id: user.id,
                kind: ActorKind::User.as_str().to_string(),
                role,
                email: user.email,
                first_name: user.first_name,
                last_name: user.last_name,
            },
            Self::Guest(guest) => CallerDto {
                id: guest.id,
                kind: ActorKind::Guest.as_str().to_string(),
                role,
                email: guest.email,
                first_name: guest.first_name,
                last_name: guest.last_name,
            },
        }
    }
}

/// Validated profile changes. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProfileParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UpdateProfileParams {
    /// Converts a profile update request.
    ///
    /// # Returns
    /// - `Ok(UpdateProfileParams)` - Trimmed values, email lowercased
    /// - `Err(AppError::Validation)` - A provided field is blank
    pub fn from_dto(dto: UpdateProfileDto) -> Result<Self, AppError> {
        let field = |value: Option<String>| -> Result<Option<String>, AppError> {
            match value.map(|v| v.trim().to_string()) {
                Some(v) if v.is_empty() => Err(AppError::Validation(
                    "Profile fields cannot be empty.".to_string(),
                )),
                other => Ok(other),
            }
        };

        Ok(Self {
            first_name: field(dto.first_name)?,
            last_name: field(dto.last_name)?,
            email: field(dto.email)?.map(|email| email.to_lowercase()),
            phone: field(dto.phone)?,
        })
    }
}

/// Validated password reset request.
#[derive(Debug, Clone)]
pub struct ResetPasswordParams {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

impl ResetPasswordParams {
    pub fn from_dto(dto: ResetPasswordDto) -> Result<Self, AppError> {
        Ok(Self {
            email: dto.email.trim().to_lowercase(),
            otp: dto.otp.trim().to_string(),
            new_password: require_password(dto.new_password)?,
        })
    }
}

/// Rejects a blank password. The password itself is kept as typed.
pub fn require_password(password: String) -> Result<String, AppError> {
    if password.trim().is_empty() {
        return Err(AppError::Validation("Password is required.".to_string()));
    }

    Ok(password)
}
