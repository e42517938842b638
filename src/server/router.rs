use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        amenity::{self, AMENITY_TAG},
        audit::{self, AUDIT_TAG},
        auth::{self, AUTH_TAG},
        guest::{self, GUEST_TAG},
        payment::{self, PAYMENT_TAG},
        reservation::{self, RESERVATION_TAG},
        room::{self, ROOM_TAG},
        room_type::{self, ROOM_TYPE_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Hotel Booking API", description = "Rooms, guests, reservations and payments"),
    paths(
        auth::login,
        auth::logout,
        auth::get_caller,
        auth::forgot_password,
        auth::reset_password,
        user::create_user,
        user::get_users,
        user::get_user,
        user::update_user,
        user::change_user_password,
        user::delete_user,
        user::update_user_status,
        guest::register_guest,
        guest::activate_guest,
        guest::resend_otp,
        guest::login_guest,
        guest::forgot_guest_password,
        guest::reset_guest_password,
        guest::get_guests,
        guest::get_guest,
        guest::update_guest,
        guest::change_guest_password,
        room::create_room,
        room::get_rooms,
        room::get_available_rooms,
        room::get_room,
        room::update_room,
        room::delete_room,
        room_type::create_room_type,
        room_type::get_room_types,
        room_type::get_room_type,
        room_type::update_room_type,
        room_type::delete_room_type,
        room_type::get_room_type_amenities,
        room_type::link_amenity,
        room_type::unlink_amenity,
        amenity::create_amenity,
        amenity::get_amenities,
        amenity::get_amenity,
        amenity::update_amenity,
        amenity::delete_amenity,
        reservation::create_reservation,
        reservation::get_reservations,
        reservation::get_reservation,
        reservation::get_guest_reservations,
        reservation::update_reservation_status,
        reservation::cancel_reservation,
        payment::get_payments,
        payment::get_payment,
        payment::update_payment_status,
        audit::get_logs,
        audit::get_log,
    ),
    tags(
        (name = AUTH_TAG, description = "Staff login, session and password reset"),
        (name = USER_TAG, description = "Staff account management"),
        (name = GUEST_TAG, description = "Guest registration, verification and login"),
        (name = ROOM_TAG, description = "Room catalog and availability"),
        (name = ROOM_TYPE_TAG, description = "Room types and their amenities"),
        (name = AMENITY_TAG, description = "Amenity catalog"),
        (name = RESERVATION_TAG, description = "Bookings and their lifecycle"),
        (name = PAYMENT_TAG, description = "Payments and reservation synchronization"),
        (name = AUDIT_TAG, description = "Audit log"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::get_caller))
        .route("/api/auth/forgot-password", post(auth::forgot_password))
        .route("/api/auth/reset-password", post(auth::reset_password))
        .route("/api/users", post(user::create_user).get(user::get_users))
        .route(
            "/api/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/api/users/{id}/password", put(user::change_user_password))
        .route("/api/users/{id}/status", put(user::update_user_status))
        .route("/api/guests", get(guest::get_guests))
        .route("/api/guests/register", post(guest::register_guest))
        .route("/api/guests/activate", post(guest::activate_guest))
        .route("/api/guests/otp", post(guest::resend_otp))
        .route("/api/guests/login", post(guest::login_guest))
        .route(
            "/api/guests/forgot-password",
            post(guest::forgot_guest_password),
        )
        .route("/api/guests/reset-password", post(guest::reset_guest_password))
        .route(
            "/api/guests/{id}",
            get(guest::get_guest).put(guest::update_guest),
        )
        .route(
            "/api/guests/{id}/password",
            put(guest::change_guest_password),
        )
        .route("/api/rooms", post(room::create_room).get(room::get_rooms))
        .route("/api/rooms/available", get(room::get_available_rooms))
        .route(
            "/api/rooms/{id}",
            get(room::get_room)
                .put(room::update_room)
                .delete(room::delete_room),
        )
        .route(
            "/api/room-types",
            post(room_type::create_room_type).get(room_type::get_room_types),
        )
        .route(
            "/api/room-types/{id}",
            get(room_type::get_room_type)
                .put(room_type::update_room_type)
                .delete(room_type::delete_room_type),
        )
        .route(
            "/api/room-types/{id}/amenities",
            get(room_type::get_room_type_amenities),
        )
        .route(
            "/api/room-types/{id}/amenities/{amenity_id}",
            post(room_type::link_amenity).delete(room_type::unlink_amenity),
        )
        .route(
            "/api/amenities",
            post(amenity::create_amenity).get(amenity::get_amenities),
        )
        .route(
            "/api/amenities/{id}",
            get(amenity::get_amenity)
                .put(amenity::update_amenity)
                .delete(amenity::delete_amenity),
        )
        .route(
            "/api/reservations",
            post(reservation::create_reservation).get(reservation::get_reservations),
        )
        .route(
            "/api/reservations/guest/{guest_id}",
            get(reservation::get_guest_reservations),
        )
        .route("/api/reservations/{id}", get(reservation::get_reservation))
        .route(
            "/api/reservations/{id}/status",
            put(reservation::update_reservation_status),
        )
        .route(
            "/api/reservations/{id}/cancel",
            post(reservation::cancel_reservation),
        )
        .route("/api/payments", get(payment::get_payments))
        .route("/api/payments/{id}", get(payment::get_payment))
        .route("/api/payments/{id}/status", put(payment::update_payment_status))
        .route("/api/logs", get(audit::get_logs))
        .route("/api/logs/{id}", get(audit::get_log))
}
