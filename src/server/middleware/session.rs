//! Type-safe session management wrappers.
//!
//! A session authenticates at most one caller: either a staff user or a guest.
//! Logging in as one kind clears the other.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_GUEST_ID: &str = "auth:guest";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a staff user as the authenticated caller.
    ///
    /// The session id is rotated so a session created before login cannot be
    /// reused to act as the user.
    ///
    /// # Returns
    /// - `Ok(())` - User id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .remove::<i32>(SESSION_AUTH_GUEST_ID)
            .await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Stores a guest as the authenticated caller.
    pub async fn set_guest_id(&self, guest_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.remove::<i32>(SESSION_AUTH_USER_ID).await?;
        self.session.insert(SESSION_AUTH_GUEST_ID, guest_id).await?;
        Ok(())
    }

    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    pub async fn get_guest_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_GUEST_ID).await?)
    }

    /// Clears all data from the session. Used on logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
