//! Factory methods for creating test data.
//!
//! Each table has a `Factory` builder for customized rows and a `create_*`
//! function for a row with defaults. Unique columns default to values derived
//! from a shared counter, so repeated calls never collide.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let (room_type, room) = factory::helpers::create_room_with_type(db).await?;
//! let guest = factory::create_guest(db).await?;
//!
//! let reservation = factory::reservation::ReservationFactory::new(db, room.id, guest.id)
//!     .dates(check_in, check_out)
//!     .status("CONFIRMED")
//!     .build()
//!     .await?;
//! ```
//!
//! Status and role columns are plain strings, written exactly as the server
//! stores them (`"ACTIVE"`, `"PENDING"`, `"ROOM_MANAGER"`, ...).

pub mod amenity;
pub mod guest;
pub mod helpers;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod room_type;
pub mod user;

pub use amenity::create_amenity;
pub use guest::create_guest;
pub use payment::create_payment;
pub use reservation::create_reservation;
pub use room::create_room;
pub use room_type::create_room_type;
pub use user::create_user;
