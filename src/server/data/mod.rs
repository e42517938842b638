//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories take SeaORM entity models in and hand them back
//! out; services convert them into domain models. Repositories that participate in the
//! booking and payment transactions are generic over `ConnectionTrait` so they accept
//! either the pooled connection or an open `DatabaseTransaction`.

pub mod amenity;
pub mod audit_log;
pub mod guest;
pub mod otp;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod room_type;
pub mod user;
