//! One-time passwords for email verification and password resets.

use chrono::{Duration, Utc};
use rand::Rng;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    data::otp::OtpRepository, error::AppError, service::mailer::Mailer,
};

/// What a mailed code is for. Only changes the wording of the mail; a code proves
/// control of the address whatever it was requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpPurpose {
    EmailVerification,
    PasswordReset,
}

impl OtpPurpose {
    fn subject(&self) -> &'static str {
        match self {
            Self::EmailVerification => "Your OTP Code",
            Self::PasswordReset => "Your password reset code",
        }
    }

    fn instruction(&self) -> &'static str {
        match self {
            Self::EmailVerification => "Use the code below to verify your email address.",
            Self::PasswordReset => "Use the code below to set a new password.",
        }
    }
}

/// Wrong guesses allowed before a code is discarded.
pub const MAX_FAILED_ATTEMPTS: i32 = 5;

pub struct OtpService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OtpService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Generates and stores a fresh code for an email, replacing any earlier one.
    ///
    /// # Returns
    /// - `Ok(String)` - The six-digit code
    /// - `Err(AppError)` - Database error
    pub async fn issue(&self, email: &str, ttl: Duration) -> Result<String, AppError> {
        let code = generate_code();
        let expires_at = Utc::now() + ttl;

        OtpRepository::new(self.db)
            .upsert(email, &code, expires_at)
            .await?;

        Ok(code)
    }

    /// Issues a code and mails it on a background task.
    ///
    /// Delivery failures are logged; the recipient can request another code.
    pub async fn issue_and_send(
        &self,
        email: &str,
        ttl: Duration,
        purpose: OtpPurpose,
        mailer: Arc<dyn Mailer>,
    ) -> Result<(), AppError> {
        let code = self.issue(email, ttl).await?;

        let to = email.to_string();
        let body = otp_mail_body(&code, purpose, ttl.num_minutes());
        tokio::spawn(async move {
            if let Err(e) = mailer.send(&to, purpose.subject(), &body).await {
                tracing::warn!("Failed to send OTP mail to {}: {}", to, e);
            }
        });

        Ok(())
    }

    /// Checks a code and consumes it on success.
    ///
    /// Every wrong guess is counted; after `MAX_FAILED_ATTEMPTS` the code is
    /// deleted and a new one has to be requested.
    ///
    /// # Returns
    /// - `Ok(())` - Code matched and has been deleted
    /// - `Err(AppError::Validation)` - No code, wrong code or expired code
    pub async fn verify(&self, email: &str, code: &str) -> Result<(), AppError> {
        let repo = OtpRepository::new(self.db);
        let invalid = || AppError::Validation("Invalid or expired OTP.".to_string());

        let stored = repo.find_by_email(email).await?.ok_or_else(invalid)?;

        if stored.code != code {
            let attempts = repo.record_failed_attempt(email).await?.unwrap_or(0);
            if attempts >= MAX_FAILED_ATTEMPTS {
                repo.delete_by_email(email).await?;
                tracing::warn!("OTP for {} discarded after {} failed attempts", email, attempts);
            }
            return Err(invalid());
        }

        if Utc::now() > stored.expires_at {
            return Err(AppError::Validation("OTP has expired.".to_string()));
        }

        repo.delete_by_email(email).await?;

        Ok(())
    }

    /// Deletes expired codes, returning how many were removed.
    pub async fn purge_expired(&self) -> Result<u64, AppError> {
        let purged = OtpRepository::new(self.db)
            .delete_expired(Utc::now())
            .await?;

        Ok(purged)
    }
}

fn generate_code() -> String {
    rand::rng().random_range(100_000..1_000_000).to_string()
}

fn otp_mail_body(code: &str, purpose: OtpPurpose, ttl_minutes: i64) -> String {
    format!(
        "<h2>{}</h2>\
         <p>{}</p>\
         <p style=\"font-size:24px;font-weight:bold;letter-spacing:4px\">{}</p>\
         <p>The code expires in {} minutes.</p>",
        purpose.subject(),
        purpose.instruction(),
        code,
        ttl_minutes
    )
}
