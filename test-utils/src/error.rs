use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or creating a table failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// The temporary directory for a file-backed database could not be created.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The session table could not be created.
    #[error("Failed to create session store: {0}")]
    SessionStore(String),
}
