//! SeaORM entity models for the hotel booking schema.
//!
//! Column types mirror the tables created by the `migration` crate. Status and
//! role columns are stored as plain strings and converted into typed enums at
//! the repository boundary.

pub mod prelude;

pub mod amenity;
pub mod audit_log;
pub mod guest;
pub mod otp;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod room_type;
pub mod room_type_amenity;
pub mod user;
