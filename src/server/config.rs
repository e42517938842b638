use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_OTP_TTL_MINUTES: i64 = 5;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Allowed CORS origin. Any origin is allowed when unset.
    pub cors_origin: Option<String>,

    /// Lifetime of an issued OTP in minutes.
    pub otp_ttl_minutes: i64,

    /// HTTP mail relay endpoint and bearer token. Mail is only logged when unset.
    pub mail_api_url: Option<String>,
    pub mail_api_key: Option<String>,

    /// Credentials for the first admin account, created at startup if no admin exists.
    pub bootstrap_admin_email: Option<String>,
    pub bootstrap_admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            cors_origin: optional_var("CORS_ORIGIN"),
            otp_ttl_minutes: parse_var("OTP_TTL_MINUTES", DEFAULT_OTP_TTL_MINUTES)?,
            mail_api_url: optional_var("MAIL_API_URL"),
            mail_api_key: optional_var("MAIL_API_KEY"),
            bootstrap_admin_email: optional_var("BOOTSTRAP_ADMIN_EMAIL"),
            bootstrap_admin_password: optional_var("BOOTSTRAP_ADMIN_PASSWORD"),
        })
    }
}

/// Reads an environment variable, treating unset and empty alike.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Reads and parses an environment variable, falling back to `default` when unset.
///
/// # Returns
/// - `Ok(value)` - Parsed value or the default
/// - `Err(ConfigError::InvalidEnvVar)` - Variable is set but fails to parse
fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional_var(name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
