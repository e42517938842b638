//! Guest factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for guests. Guests are created `ACTIVE` unless told otherwise.
///
/// Like `UserFactory`, the password hash never verifies; register through the
/// guest service to test logins.
pub struct GuestFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    status: String,
}

impl<'a> GuestFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Guest".to_string(),
            last_name: format!("Number {}", id),
            email: format!("guest{}@mail.test", id),
            phone: format!("+1666{:07}", id),
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

    /// Sets the status: `ACTIVE` or `INACTIVE`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::guest::Model, DbErr> {
        entity::guest::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            password_hash: ActiveValue::Set("unusable".to_string()),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active guest.
pub async fn create_guest(db: &DatabaseConnection) -> Result<entity::guest::Model, DbErr> {
    GuestFactory::new(db).build().await
}
