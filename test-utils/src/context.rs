use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};
use std::sync::Arc;
use tempfile::TempDir;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Database connection and session for a single test.
///
/// Both are created lazily. The in-memory database lives as long as the context,
/// and the session is stored in that same database.
///
/// SeaORM limits in-memory SQLite pools to a single connection, so an open
/// transaction holds the whole database until it ends. Concurrent transactions in
/// a test run one after the other. Use `on_disk` when transactions have to run
/// side by side.
#[derive(Default)]
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    pub session: Option<Session>,
    /// Directory holding the database file of an on-disk context. Removed on drop.
    _dir: Option<TempDir>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context backed by a SQLite file in a fresh temporary directory.
    ///
    /// The pool opens up to `max_connections` connections, so concurrent
    /// transactions each get their own connection and contend on SQLite's locks.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an empty database
    /// - `Err(TestError::Io)` - Temporary directory could not be created
    /// - `Err(TestError::Database)` - Connection failed
    pub async fn on_disk(max_connections: u32) -> Result<Self, TestError> {
        let dir = tempfile::tempdir()?;
        let url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("test.sqlite").display()
        );

        let mut options = ConnectOptions::new(url);
        options.max_connections(max_connections).sqlx_logging(false);
        let db = Database::connect(options).await?;

        Ok(Self {
            db: Some(db),
            session: None,
            _dir: Some(dir),
        })
    }

    /// Gets the database connection, connecting on first use.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The in-memory database
    /// - `Err(TestError::Database)` - Connection failed
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let db = Database::connect("sqlite::memory:").await?;
            self.db = Some(db);
        }

        self.db
            .as_ref()
            .ok_or_else(|| TestError::Database(sea_orm::DbErr::Custom("no database".into())))
    }

    /// Executes CREATE TABLE statements in order. Called by `TestBuilder::build()`.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets the session, creating the session table and a fresh session on first use.
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestBuilder::new().with_booking_tables().build().await?;
    /// let session = test.session().await?;
    ///
    /// AuthSession::new(session).set_user_id(user.id).await?;
    /// ```
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let pool = self.database().await?.get_sqlite_connection_pool().clone();
            let store = SqliteStore::new(pool);

            store
                .migrate()
                .await
                .map_err(|e| TestError::SessionStore(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        self.session
            .as_ref()
            .ok_or_else(|| TestError::SessionStore("no session".into()))
    }

    /// Gets both the database and the session, initializing them as needed.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(TestError::SessionStore("context not initialized".into())),
        }
    }
}
