pub use super::amenity::Entity as Amenity;
pub use super::audit_log::Entity as AuditLog;
pub use super::guest::Entity as Guest;
pub use super::otp::Entity as Otp;
pub use super::payment::Entity as Payment;
pub use super::reservation::Entity as Reservation;
pub use super::room::Entity as Room;
pub use super::room_type::Entity as RoomType;
pub use super::room_type_amenity::Entity as RoomTypeAmenity;
pub use super::user::Entity as User;
