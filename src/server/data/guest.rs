//! Guest data repository.
//!
//! Generic over the connection so the reservation service can look guests up inside
//! its booking transaction.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ExprTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    auth::UpdateProfileParams,
    guest::{GuestStatus, RegisterGuestParams},
};

pub struct GuestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GuestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a newly registered guest with status `INACTIVE`.
    ///
    /// # Arguments
    /// - `params` - Registration details; the password field is ignored
    /// - `password_hash` - Argon2 hash of the registration password
    ///
    /// # Returns
    /// - `Ok(Model)` - The created guest
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(
        &self,
        params: &RegisterGuestParams,
        password_hash: String,
    ) -> Result<entity::guest::Model, DbErr> {
        entity::guest::ActiveModel {
            first_name: ActiveValue::Set(params.first_name.clone()),
            last_name: ActiveValue::Set(params.last_name.clone()),
            email: ActiveValue::Set(params.email.clone()),
            phone: ActiveValue::Set(params.phone.clone()),
            password_hash: ActiveValue::Set(password_hash),
            status: ActiveValue::Set(GuestStatus::Inactive.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::guest::Model>, DbErr> {
        entity::prelude::Guest::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::guest::Model>, DbErr> {
        entity::prelude::Guest::find()
            .filter(entity::guest::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks whether a guest already uses the email or the phone number.
    pub async fn email_or_phone_taken(&self, email: &str, phone: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Guest::find()
            .filter(
                entity::guest::Column::Email
                    .eq(email)
                    .or(entity::guest::Column::Phone.eq(phone)),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a guest other than `id` uses the email or the phone number.
    pub async fn contact_taken_by_other(
        &self,
        email: &str,
        phone: &str,
        id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Guest::find()
            .filter(
                entity::guest::Column::Email
                    .eq(email)
                    .or(entity::guest::Column::Phone.eq(phone)),
            )
            .filter(entity::guest::Column::Id.ne(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn get_all(&self) -> Result<Vec<entity::guest::Model>, DbErr> {
        entity::prelude::Guest::find()
            .order_by_asc(entity::guest::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets the status of the guest with the given email.
    ///
    /// # Returns
    /// - `Ok(true)` - Guest updated
    /// - `Ok(false)` - No guest with that email
    pub async fn set_status_by_email(&self, email: &str, status: GuestStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::Guest::update_many()
            .col_expr(entity::guest::Column::Status, Expr::value(status.as_str()))
            .filter(entity::guest::Column::Email.eq(email))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Applies the provided profile fields to a guest.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated guest
    /// - `Ok(None)` - No guest with that id
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn update_profile(
        &self,
        id: i32,
        changes: UpdateProfileParams,
    ) -> Result<Option<entity::guest::Model>, DbErr> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        if changes == UpdateProfileParams::default() {
            return Ok(Some(existing));
        }

        let mut active: entity::guest::ActiveModel = existing.into();
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

    /// Replaces the password hash of a guest.
    ///
    /// # Returns
    /// - `Ok(true)` - Password updated
    /// - `Ok(false)` - No guest with that id
    pub async fn set_password_hash(&self, id: i32, password_hash: String) -> Result<bool, DbErr> {
        let result = entity::prelude::Guest::update_many()
            .col_expr(
                entity::guest::Column::PasswordHash,
                Expr::value(password_hash),
            )
            .filter(entity::guest::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
