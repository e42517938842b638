//! Staff account service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{guest::GuestRepository, user::UserRepository},
    error::{auth::AuthError, conflict_on_unique, AppError},
    model::{
        auth::{ResetPasswordParams, UpdateProfileParams},
        user::{CreateUserParams, User, UserStatus},
    },
    service::otp::OtpService,
    util::password::{hash_password, verify_password},
};

pub(crate) const CONTACT_TAKEN: &str = "Email or phone number is already in use.";

/// Service providing business logic for staff accounts.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active staff account.
    ///
    /// Email and phone must not be used by any staff account or guest.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Conflict)` - Email or phone already in use
    /// - `Err(AppError::Internal)` - Password hashing failed
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo
            .email_or_phone_taken(&params.email, &params.phone)
            .await?
            || GuestRepository::new(self.db)
                .email_or_phone_taken(&params.email, &params.phone)
                .await?
        {
            return Err(AppError::Conflict(CONTACT_TAKEN.to_string()));
        }

        let password_hash = hash_password(&params.password)?;
        let user = user_repo
            .create(
                params.first_name,
                params.last_name,
                params.email,
                params.phone,
                password_hash,
                params.role,
            )
            .await
            .map_err(|e| conflict_on_unique(e, CONTACT_TAKEN))?;

        tracing::info!("Created {} account {}", user.role, user.id);

        User::from_entity(user)
    }

    /// Checks staff credentials.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid and the account is active
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::AccountBlocked)` - Account is blocked
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_email(&email.trim().to_lowercase())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = User::from_entity(user)?;
        if user.status == UserStatus::Blocked {
            return Err(AuthError::AccountBlocked(user.id).into());
        }

        Ok(user)
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        users.into_iter().map(User::from_entity).collect()
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        User::from_entity(user)
    }

    /// Blocks or re-activates a staff account.
    pub async fn set_status(&self, id: i32, status: UserStatus) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .set_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        User::from_entity(user)
    }

    /// Changes the name or contact details of a staff account.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated account
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::Conflict)` - New email or phone belongs to another account
    ///   or guest
    pub async fn update_profile(
        &self,
        id: i32,
        changes: UpdateProfileParams,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let current = user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let email = changes.email.as_deref().unwrap_or(&current.email);
        let phone = changes.phone.as_deref().unwrap_or(&current.phone);
        if user_repo.contact_taken_by_other(email, phone, id).await?
            || GuestRepository::new(self.db)
                .email_or_phone_taken(email, phone)
                .await?
        {
            return Err(AppError::Conflict(CONTACT_TAKEN.to_string()));
        }

        let user = user_repo
            .update_profile(id, changes)
            .await
            .map_err(|e| conflict_on_unique(e, CONTACT_TAKEN))?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        User::from_entity(user)
    }

    /// Replaces the password of a staff account.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn change_password(&self, id: i32, password: &str) -> Result<(), AppError> {
        let password_hash = hash_password(password)?;

        if !UserRepository::new(self.db)
            .set_password_hash(id, password_hash)
            .await?
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("Password changed for staff account {}", id);

        Ok(())
    }

    /// Deletes a staff account. An admin cannot delete their own account.
    ///
    /// # Arguments
    /// - `id` - Account to delete
    /// - `caller_id` - Staff user performing the deletion
    ///
    /// # Returns
    /// - `Ok(User)` - The deleted account
    /// - `Err(AppError::Conflict)` - Caller tried to delete their own account
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn delete(&self, id: i32, caller_id: i32) -> Result<User, AppError> {
        if id == caller_id {
            return Err(AppError::Conflict(
                "You cannot delete your own account.".to_string(),
            ));
        }

        let user = self.get_by_id(id).await?;
        UserRepository::new(self.db).delete(id).await?;

        tracing::info!("Deleted {} account {}", user.role.as_str(), id);

        Ok(user)
    }

    /// Finds the staff account a password reset code may be mailed to.
    ///
    /// # Returns
    /// - `Ok(User)` - Account with that email
    /// - `Err(AppError::NotFound)` - No staff account uses the email
    pub async fn password_reset_target(&self, email: &str) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_email(&email.trim().to_lowercase())
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        User::from_entity(user)
    }

    /// Sets a new password after checking the code mailed for the reset.
    ///
    /// # Returns
    /// - `Ok(User)` - Password replaced and the code consumed
    /// - `Err(AppError::NotFound)` - No staff account uses the email
    /// - `Err(AppError::Validation)` - Invalid or expired code
    pub async fn reset_password(&self, params: ResetPasswordParams) -> Result<User, AppError> {
        let user = self.password_reset_target(&params.email).await?;

        OtpService::new(self.db)
            .verify(&user.email, &params.otp)
            .await?;
        self.change_password(user.id, &params.new_password).await?;

        Ok(user)
    }

    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        Ok(UserRepository::new(self.db).admin_exists().await?)
    }
}
