use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// The authenticated caller as reported by `/api/auth/me`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CallerDto {
    pub id: i32,
    /// `USER` for staff accounts, `GUEST` for guest accounts.
    pub kind: String,
    pub role: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Profile changes for a staff user or guest. Omitted fields stay as they are.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateProfileDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ChangePasswordDto {
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ForgotPasswordDto {
    pub email: String,
}

/// Sets a new password with the code mailed by the forgot-password endpoint.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ResetPasswordDto {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}
