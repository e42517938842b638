use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    model::user::{CreateUserParams, Role},
    service::{
        mailer::{HttpMailer, LogMailer, Mailer},
        user::UserService,
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's Sqlite pool.
///
/// Sessions live in the same database as the application data. The session table is
/// created on first start. Sessions expire after seven days of inactivity.
///
/// # Arguments
/// - `db` - Connected database whose pool is shared with the session store
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Selects the mail transport.
///
/// Uses the HTTP relay when both `MAIL_API_URL` and `MAIL_API_KEY` are configured and
/// falls back to a transport that only logs outgoing mail otherwise.
pub fn setup_mailer(config: &Config) -> Arc<dyn Mailer> {
    match (&config.mail_api_url, &config.mail_api_key) {
        (Some(url), Some(key)) => Arc::new(HttpMailer::new(url.clone(), key.clone())),
        _ => {
            tracing::warn!("MAIL_API_URL or MAIL_API_KEY not set, outgoing mail will only be logged");
            Arc::new(LogMailer)
        }
    }
}

/// Builds the CORS layer.
///
/// With `CORS_ORIGIN` set, only that origin may call the API and cookies are allowed
/// so the session survives cross-origin requests. Without it any origin is allowed
/// and credentials are not.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let Some(origin) = &config.cors_origin else {
        return Ok(CorsLayer::permissive());
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            value: origin.clone(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

/// Ensures at least one admin account exists.
///
/// When no active admin is present and bootstrap credentials are configured, an admin
/// account is created with them. Without credentials a warning is logged, since no one
/// would be able to create staff accounts.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Configuration holding the optional bootstrap credentials
///
/// # Returns
/// - `Ok(())` - An admin exists or was created, or no credentials were configured
/// - `Err(AppError)` - Database or hashing error
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let user_service = UserService::new(db);

    if user_service.admin_exists().await? {
        return Ok(());
    }

    let (Some(email), Some(password)) = (
        config.bootstrap_admin_email.clone(),
        config.bootstrap_admin_password.clone(),
    ) else {
        tracing::warn!(
            "No admin account exists, set BOOTSTRAP_ADMIN_EMAIL and BOOTSTRAP_ADMIN_PASSWORD to create one"
        );
        return Ok(());
    };

    let email = email.trim().to_lowercase();
    let admin = user_service
        .create(CreateUserParams {
            first_name: "System".to_string(),
            last_name: "Administrator".to_string(),
            phone: format!("admin:{}", email),
            email,
            password,
            role: Role::Admin,
        })
        .await?;

    tracing::info!("Created bootstrap admin account {}", admin.email);

    Ok(())
}
