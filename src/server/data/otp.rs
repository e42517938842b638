use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, ExprTrait, OnConflict};
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// One-time passwords keyed by email. At most one live code exists per email.
pub struct OtpRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OtpRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a code for an email, replacing any earlier code and its expiry and
    /// clearing the failed attempt count.
    ///
    /// # Arguments
    /// - `email` - Address the code was sent to
    /// - `code` - Six-digit code
    /// - `expires_at` - Instant after which the code is rejected
    ///
    /// # Returns
    /// - `Ok(())` - Code stored
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        email: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::Otp::insert(entity::otp::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            code: ActiveValue::Set(code.to_string()),
            expires_at: ActiveValue::Set(expires_at),
            failed_attempts: ActiveValue::Set(0),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::otp::Column::Email)
                .update_columns([
                    entity::otp::Column::Code,
                    entity::otp::Column::ExpiresAt,
                    entity::otp::Column::FailedAttempts,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::otp::Model>, DbErr> {
        entity::prelude::Otp::find()
            .filter(entity::otp::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Counts one wrong guess against the email's code.
    ///
    /// # Returns
    /// - `Ok(Some(attempts))` - Failed attempts after this one
    /// - `Ok(None)` - No code stored for the email
    pub async fn record_failed_attempt(&self, email: &str) -> Result<Option<i32>, DbErr> {
        entity::prelude::Otp::update_many()
            .col_expr(
                entity::otp::Column::FailedAttempts,
                Expr::col(entity::otp::Column::FailedAttempts).add(1),
            )
            .filter(entity::otp::Column::Email.eq(email))
            .exec(self.db)
            .await?;

        Ok(self
            .find_by_email(email)
            .await?
            .map(|otp| otp.failed_attempts))
    }

    pub async fn delete_by_email(&self, email: &str) -> Result<(), DbErr> {
        entity::prelude::Otp::delete_many()
            .filter(entity::otp::Column::Email.eq(email))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes every code that expired before `now`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted codes
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Otp::delete_many()
            .filter(entity::otp::Column::ExpiresAt.lt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
