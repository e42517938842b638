//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Mailer used to deliver OTP codes
//! - OTP lifetime taken from configuration

use chrono::Duration;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::mailer::Mailer;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn Mailer>` is a reference-counted pointer
/// - `Duration` is `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Outgoing mail transport for OTP delivery.
    pub mailer: Arc<dyn Mailer>,

    /// How long an issued OTP stays valid.
    pub otp_ttl: Duration,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `mailer` - Mail transport used for OTP delivery
    /// - `otp_ttl` - Lifetime of issued OTP codes
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, mailer: Arc<dyn Mailer>, otp_ttl: Duration) -> Self {
        Self {
            db,
            mailer,
            otp_ttl,
        }
    }
}
