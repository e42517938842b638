//! Hotel Booking Test Utils
//!
//! Shared testing utilities for the hotel booking server. Tests run against an
//! in-memory SQLite database whose tables are generated from the SeaORM entities.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder selecting which tables to create
//! - **TestContext**: Database connection and session for one test
//! - **TestError**: Errors raised while setting up a test
//! - **factory**: Row factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn books_a_room() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_booking_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (_, room) = factory::helpers::create_room_with_type(db).await?;
//!     let guest = factory::guest::create_guest(db).await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
