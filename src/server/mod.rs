//! Hotel booking API backend.
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and transaction boundaries
//! - **Data Layer** (`data/`) - SeaORM queries returning entity models
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and the role guard
//!
//! Supporting modules:
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database, session, mailer and admin bootstrap
//! - **Router** (`router`) - Route table and OpenAPI document
//! - **Scheduler** (`scheduler/`) - Cron job purging expired OTP codes
//! - **Util** (`util/`) - Date ranges, money and password hashing
//!
//! # Request Flow
//!
//! 1. **Router** matches the request to a controller
//! 2. **Controller** resolves the caller with `AuthGuard` and converts the DTO to params
//! 3. **Service** applies business rules, opening a transaction where needed
//! 4. **Data** runs the queries
//! 5. **Service** converts entity models to domain models
//! 6. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
