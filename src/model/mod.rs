//! Wire DTOs shared by the HTTP layer.
//!
//! Every type here is serialized to or deserialized from JSON request and response
//! bodies and carries a `utoipa::ToSchema` derive so it shows up in the generated
//! OpenAPI document. Server-side domain models live in `server::model` and convert
//! into these types at the controller boundary.

pub mod amenity;
pub mod api;
pub mod audit;
pub mod auth;
pub mod guest;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod room_type;
pub mod user;
