//! Guest accounts: self-registration, email verification, login, profile and
//! password management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{guest::GuestRepository, user::UserRepository},
    error::{auth::AuthError, conflict_on_unique, AppError},
    model::{
        auth::{ResetPasswordParams, UpdateProfileParams},
        guest::{Guest, GuestStatus, RegisterGuestParams},
    },
    service::{otp::OtpService, user::CONTACT_TAKEN},
    util::password::{hash_password, verify_password},
};

pub struct GuestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an inactive guest.
    ///
    /// The caller issues the verification OTP once registration succeeds.
    ///
    /// # Returns
    /// - `Ok(Guest)` - The created guest with status `INACTIVE`
    /// - `Err(AppError::Conflict)` - Email or phone already in use by a guest or
    ///   staff account
    pub async fn register(&self, params: RegisterGuestParams) -> Result<Guest, AppError> {
        let guest_repo = GuestRepository::new(self.db);

        if guest_repo
            .email_or_phone_taken(&params.email, &params.phone)
            .await?
            || UserRepository::new(self.db)
                .email_or_phone_taken(&params.email, &params.phone)
                .await?
        {
            return Err(AppError::Conflict(CONTACT_TAKEN.to_string()));
        }

        let password_hash = hash_password(&params.password)?;
        let guest = guest_repo
            .create(&params, password_hash)
            .await
            .map_err(|e| conflict_on_unique(e, CONTACT_TAKEN))?;

        tracing::info!("Registered guest {}", guest.id);

        Guest::from_entity(guest)
    }

    /// Activates a guest after checking the OTP mailed to it.
    ///
    /// # Returns
    /// - `Ok(Guest)` - The guest, now `ACTIVE`
    /// - `Err(AppError::Validation)` - Invalid or expired OTP
    /// - `Err(AppError::NotFound)` - No guest registered with the email
    pub async fn activate(&self, email: &str, code: &str) -> Result<Guest, AppError> {
        let email = email.trim().to_lowercase();
        let repo = GuestRepository::new(self.db);

        if repo.find_by_email(&email).await?.is_none() {
            return Err(AppError::NotFound("Guest not found".to_string()));
        }

        OtpService::new(self.db).verify(&email, code.trim()).await?;
        repo.set_status_by_email(&email, GuestStatus::Active)
            .await?;

        let guest = repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))?;

        Guest::from_entity(guest)
    }

    /// Finds the inactive guest a new OTP may be sent to.
    ///
    /// # Returns
    /// - `Ok(Guest)` - Guest exists and is still unverified
    /// - `Err(AppError::NotFound)` - No guest with the email
    /// - `Err(AppError::Conflict)` - Guest is already active
    pub async fn pending_activation(&self, email: &str) -> Result<Guest, AppError> {
        let guest = GuestRepository::new(self.db)
            .find_by_email(&email.trim().to_lowercase())
            .await?
            .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))?;
        let guest = Guest::from_entity(guest)?;

        if guest.status == GuestStatus::Active {
            return Err(AppError::Conflict("Account is already activated.".to_string()));
        }

        Ok(guest)
    }

    /// Checks guest credentials.
    ///
    /// # Returns
    /// - `Ok(Guest)` - Credentials valid and the guest is active
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::AccountInactive)` - Email not verified yet
    pub async fn login(&self, email: &str, password: &str) -> Result<Guest, AppError> {
        let guest = GuestRepository::new(self.db)
            .find_by_email(&email.trim().to_lowercase())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &guest.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let guest = Guest::from_entity(guest)?;
        if guest.status != GuestStatus::Active {
            return Err(AuthError::AccountInactive(guest.id).into());
        }

        Ok(guest)
    }

    pub async fn get_all(&self) -> Result<Vec<Guest>, AppError> {
        let guests = GuestRepository::new(self.db).get_all().await?;

        guests.into_iter().map(Guest::from_entity).collect()
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Guest, AppError> {
        let guest = GuestRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))?;

        Guest::from_entity(guest)
    }

    /// Changes the name or contact details of a guest.
    ///
    /// # Returns
    /// - `Ok(Guest)` - The updated guest
    /// - `Err(AppError::NotFound)` - No such guest
    /// - `Err(AppError::Conflict)` - New email or phone belongs to another guest or
    ///   a staff account
    pub async fn update_profile(
        &self,
        id: i32,
        changes: UpdateProfileParams,
    ) -> Result<Guest, AppError> {
        let guest_repo = GuestRepository::new(self.db);
        let current = guest_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))?;

        let email = changes.email.as_deref().unwrap_or(&current.email);
        let phone = changes.phone.as_deref().unwrap_or(&current.phone);
        if guest_repo.contact_taken_by_other(email, phone, id).await?
            || UserRepository::new(self.db)
                .email_or_phone_taken(email, phone)
                .await?
        {
            return Err(AppError::Conflict(CONTACT_TAKEN.to_string()));
        }

        let guest = guest_repo
            .update_profile(id, changes)
            .await
            .map_err(|e| conflict_on_unique(e, CONTACT_TAKEN))?
            .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))?;

        Guest::from_entity(guest)
    }

    /// Replaces a guest's password.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::NotFound)` - No such guest
    pub async fn change_password(&self, id: i32, password: &str) -> Result<(), AppError> {
        let password_hash = hash_password(password)?;

        if !GuestRepository::new(self.db)
            .set_password_hash(id, password_hash)
            .await?
        {
            return Err(AppError::NotFound("Guest not found".to_string()));
        }

        tracing::info!("Password changed for guest {}", id);

        Ok(())
    }

    /// Finds the guest a password reset code may be mailed to.
    pub async fn password_reset_target(&self, email: &str) -> Result<Guest, AppError> {
        let guest = GuestRepository::new(self.db)
            .find_by_email(&email.trim().to_lowercase())
            .await?
            .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))?;

        Guest::from_entity(guest)
    }

    /// Sets a new password after checking the code mailed for the reset.
    ///
    /// The guest's activation status is left as it is.
    ///
    /// # Returns
    /// - `Ok(Guest)` - Password replaced and the code consumed
    /// - `Err(AppError::NotFound)` - No guest uses the email
    /// - `Err(AppError::Validation)` - Invalid or expired code
    pub async fn reset_password(&self, params: ResetPasswordParams) -> Result<Guest, AppError> {
        let guest = self.password_reset_target(&params.email).await?;

        OtpService::new(self.db)
            .verify(&guest.email, &params.otp)
            .await?;
        self.change_password(guest.id, &params.new_password).await?;

        Ok(guest)
    }
}
