//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce business
//! rules, own transaction boundaries and convert entity models into domain models.
//! Controllers never talk to repositories directly.

pub mod amenity;
pub mod audit;
pub mod availability;
pub mod guest;
pub mod mailer;
pub mod otp;
pub mod payment;
pub mod pricing;
pub mod reservation;
pub mod room;
pub mod room_type;
pub mod user;

#[cfg(test)]
mod test;
