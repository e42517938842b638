use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{guest::GuestRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{
        auth::Caller,
        guest::{Guest, GuestStatus},
        user::{Role, User, UserStatus},
    },
};

/// Resolves the caller of a request from its session and checks its role.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires an authenticated caller whose role is one of `roles`.
    ///
    /// # Arguments
    /// - `roles` - Allowed roles; an empty slice admits any authenticated caller
    ///
    /// # Returns
    /// - `Ok(Caller)` - The authenticated, active caller
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session points at a deleted account
    /// - `Err(AuthError::AccountBlocked)` / `Err(AuthError::AccountInactive)` - Account
    ///   may not act
    /// - `Err(AuthError::AccessDenied)` - Role not allowed
    pub async fn require(&self, roles: &[Role]) -> Result<Caller, AppError> {
        let caller = self.caller().await?;

        if !roles.is_empty() && !roles.contains(&caller.role()) {
            let actor = caller.actor();
            return Err(AuthError::AccessDenied {
                kind: actor.kind.as_str(),
                id: actor.id,
                reason: format!(
                    "role {} is not one of [{}]",
                    caller.role().as_str(),
                    roles
                        .iter()
                        .map(|r| r.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            }
            .into());
        }

        Ok(caller)
    }

    async fn caller(&self) -> Result<Caller, AppError> {
        let auth_session = AuthSession::new(self.session);

        if let Some(user_id) = auth_session.get_user_id().await? {
            let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
                return Err(AuthError::UserNotInDatabase {
                    kind: "USER",
                    id: user_id,
                }
                .into());
            };
            let user = User::from_entity(user)?;
            if user.status == UserStatus::Blocked {
                return Err(AuthError::AccountBlocked(user.id).into());
            }

            return Ok(Caller::Staff(user));
        }

        if let Some(guest_id) = auth_session.get_guest_id().await? {
            let Some(guest) = GuestRepository::new(self.db).find_by_id(guest_id).await? else {
                return Err(AuthError::UserNotInDatabase {
                    kind: "GUEST",
                    id: guest_id,
                }
                .into());
            };
            let guest = Guest::from_entity(guest)?;
            if guest.status != GuestStatus::Active {
                return Err(AuthError::AccountInactive(guest.id).into());
            }

            return Ok(Caller::Guest(guest));
        }

        Err(AuthError::UserNotInSession.into())
    }
}

/// Admits admins and the staff user `id` itself.
///
/// # Returns
/// - `Ok(())` - Caller is an admin or the account owner
/// - `Err(AuthError::AccessDenied)` - Any other caller
pub fn require_self_or_admin(caller: &Caller, id: i32) -> Result<(), AppError> {
    if caller.role() == Role::Admin || caller.user_id() == Some(id) {
        return Ok(());
    }

    let actor = caller.actor();
    Err(AuthError::AccessDenied {
        kind: actor.kind.as_str(),
        id: actor.id,
        reason: format!("attempted to manage staff account {}", id),
    }
    .into())
}

/// Admits only the guest `id` itself.
///
/// # Returns
/// - `Ok(())` - Caller is that guest
/// - `Err(AuthError::AccessDenied)` - Staff or any other guest
pub fn require_same_guest(caller: &Caller, id: i32) -> Result<(), AppError> {
    if caller.guest_id() == Some(id) {
        return Ok(());
    }

    let actor = caller.actor();
    Err(AuthError::AccessDenied {
        kind: actor.kind.as_str(),
        id: actor.id,
        reason: format!("attempted to manage guest {}", id),
    }
    .into())
}
