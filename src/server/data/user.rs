//! Staff user data repository for database operations.
//!
//! This module provides the `UserRepository` for managing staff accounts. It handles
//! creation, lookup by id or email, listing, profile and password changes, status
//! changes, deletion and the admin existence check used at startup.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    auth::UpdateProfileParams,
    user::{Role, UserStatus},
};

/// Repository providing database operations for staff user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active staff account.
    ///
    /// # Arguments
    /// - `first_name`, `last_name`, `email`, `phone` - Account details
    /// - `password_hash` - Argon2 PHC string
    /// - `role` - Staff role
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        phone: String,
        password_hash: String,
        role: Role,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            email: ActiveValue::Set(email),
            phone: ActiveValue::Set(phone),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(role.as_str().to_string()),
            status: ActiveValue::Set(UserStatus::Active.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks whether a staff account already uses the email or the phone number.
    pub async fn email_or_phone_taken(&self, email: &str, phone: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(
                entity::user::Column::Email
                    .eq(email)
                    .or(entity::user::Column::Phone.eq(phone)),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a staff account other than `id` uses the email or the phone.
    pub async fn contact_taken_by_other(
        &self,
        email: &str,
        phone: &str,
        id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(
                entity::user::Column::Email
                    .eq(email)
                    .or(entity::user::Column::Phone.eq(phone)),
            )
            .filter(entity::user::Column::Id.ne(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all staff accounts ordered by id.
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets the status of a staff account.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error
    pub async fn set_status(
        &self,
        id: i32,
        status: UserStatus,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::Status, Expr::value(status.as_str()))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Applies the provided profile fields to a staff account.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn update_profile(
        &self,
        id: i32,
        changes: UpdateProfileParams,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        if changes == UpdateProfileParams::default() {
            return Ok(Some(existing));
        }

        let mut active: entity::user::ActiveModel = existing.into();
        if let Some(first_name) = changes.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(email) = changes.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(phone) = changes.phone {
            active.phone = ActiveValue::Set(phone);
        }

        Ok(Some(active.update(self.db).await?))
    }

    /// Replaces the password hash of a staff account.
    ///
    /// # Returns
    /// - `Ok(true)` - Password updated
    /// - `Ok(false)` - No user with that id
    pub async fn set_password_hash(&self, id: i32, password_hash: String) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::PasswordHash,
                Expr::value(password_hash),
            )
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a staff account.
    ///
    /// # Returns
    /// - `Ok(true)` - Account deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks if an active admin account exists.
    ///
    /// Used at startup to decide whether the bootstrap admin should be created.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one active admin exists
    /// - `Ok(false)` - No active admin exists
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .filter(entity::user::Column::Status.eq(UserStatus::Active.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }
}
