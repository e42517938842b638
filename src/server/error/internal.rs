use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to hash a password with argon2.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// A stored enum column holds a value the application does not know.
    ///
    /// Indicates a row written outside the application or a missing migration.
    #[error("Unknown {field} value '{value}' stored in database")]
    UnknownStoredValue {
        /// Column the value was read from
        field: &'static str,
        /// The unrecognized value
        value: String,
    },

    /// A stored monetary value cannot be represented as a decimal.
    #[error("Stored amount {0} is not a finite number")]
    InvalidAmount(f64),
}
