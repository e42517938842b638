//! Staff user factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for staff accounts.
///
/// The stored password hash is a placeholder that never verifies. Tests that log
/// in should create the account through the user service instead.
///
/// # Example
///
/// ```rust,ignore
/// let manager = UserFactory::new(db)
///     .role("ROOM_MANAGER")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    role: String,
    status: String,
}

impl<'a> UserFactory<'a> {
    /// Defaults: role `RECEPTIONIST`, status `ACTIVE`, unique email and phone.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Staff".to_string(),
            last_name: format!("Member {}", id),
            email: format!("staff{}@hotel.test", id),
            phone: format!("+1555{:07}", id),
            role: "RECEPTIONIST".to_string(),
            status: "ACTIVE".to_string(),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the role: `ADMIN`, `ROOM_MANAGER` or `RECEPTIONIST`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the status: `ACTIVE` or `BLOCKED`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            password_hash: ActiveValue::Set("unusable".to_string()),
            role: ActiveValue::Set(self.role),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active receptionist.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an active staff account with the given role.
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(role).build().await
}
