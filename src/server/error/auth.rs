use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No staff user or guest id is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated caller in session")]
    UserNotInSession,

    /// The session references an account that no longer exists.
    ///
    /// Treated like a missing session: 401 Unauthorized.
    #[error("Session references missing {kind} account {id}")]
    UserNotInDatabase {
        /// `USER` or `GUEST`
        kind: &'static str,
        id: i32,
    },

    /// The caller is authenticated but its role is not allowed on the route.
    ///
    /// Results in a 403 Forbidden response. The message is logged, not returned.
    #[error("Access denied for {kind} {id}: {reason}")]
    AccessDenied {
        kind: &'static str,
        id: i32,
        reason: String,
    },

    /// Unknown email or wrong password at login.
    ///
    /// Results in a 401 Unauthorized response with a message that does not reveal
    /// which of the two was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// A staff account with status BLOCKED tried to log in or make a request.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Account {0} is blocked")]
    AccountBlocked(i32),

    /// A guest account that has not completed OTP verification.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Guest account {0} is not activated")]
    AccountInactive(i32),
}

impl AuthError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase { .. } | Self::InvalidCredentials => {
                "unauthorized"
            }
            Self::AccessDenied { .. } | Self::AccountBlocked(_) | Self::AccountInactive(_) => {
                "forbidden"
            }
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 with "Authentication required"
/// - `InvalidCredentials` → 401 with "Invalid email or password"
/// - `AccessDenied` → 403 with "Access denied"
/// - `AccountBlocked` → 403 with "Account is blocked"
/// - `AccountInactive` → 403 with "Account is not activated"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let kind = self.kind();
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase { .. } => {
                error_response(StatusCode::UNAUTHORIZED, kind, "Authentication required")
            }
            Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, kind, "Invalid email or password")
            }
            Self::AccessDenied { .. } => error_response(StatusCode::FORBIDDEN, kind, "Access denied"),
            Self::AccountBlocked(_) => {
                error_response(StatusCode::FORBIDDEN, kind, "Account is blocked")
            }
            Self::AccountInactive(_) => error_response(
                StatusCode::FORBIDDEN,
                kind,
                "Account is not activated, verify your email first",
            ),
        }
    }
}
