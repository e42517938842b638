use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        reservation::{
            CreateReservationDto, CreatedReservationDto, ReservationDetailsDto, ReservationDto,
            UpdateReservationStatusDto,
        },
    },
    server::{
        controller::audit,
        error::{auth::AuthError, AppError},
        middleware::auth::AuthGuard,
        model::{
            audit::{ActorKind, AuditCategory},
            reservation::{CreateReservationParams, ReservationStatus},
            user::Role,
        },
        service::reservation::ReservationService,
        state::AppState,
    },
};

pub static RESERVATION_TAG: &str = "reservation";

const BOOKING_ROLES: [Role; 2] = [Role::Guest, Role::Receptionist];
const ANY_ROLE: [Role; 4] = [
    Role::Admin,
    Role::RoomManager,
    Role::Receptionist,
    Role::Guest,
];

#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Room booked and payment recorded", body = CreatedReservationDto),
        (status = 400, description = "Missing field, invalid dates or amount mismatch", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller may not book rooms", body = ErrorDto),
        (status = 404, description = "Room or guest not found", body = ErrorDto),
        (status = 409, description = "Room not bookable for the selected dates", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&BOOKING_ROLES)
        .await?;

    let params = CreateReservationParams::from_dto(payload, caller.guest_id())?;
    let created = ReservationService::new(&state.db).create(params).await?;

    audit(
        &state,
        caller.actor(),
        AuditCategory::Create,
        format!(
            "Booked room {} for guest {} from {} to {} (reservation {})",
            created.reservation.room_id,
            created.reservation.guest_id,
            created.reservation.check_in,
            created.reservation.check_out,
            created.reservation.id
        ),
    );

    Ok((StatusCode::CREATED, Json(created.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "All reservations, newest first", body = Vec<ReservationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&Role::STAFF)
        .await?;

    let reservations = ReservationService::new(&state.db).get_all().await?;
    let reservations_dto: Vec<_> = reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reservations_dto)))
}

#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation with room, guest and payments", body = ReservationDetailsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&Role::STAFF)
        .await?;

    let details = ReservationService::new(&state.db).get_details(id).await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/reservations/guest/{guest_id}",
    tag = RESERVATION_TAG,
    params(
        ("guest_id" = i32, Path, description = "Guest ID")
    ),
    responses(
        (status = 200, description = "The guest's reservations, possibly empty", body = Vec<ReservationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Guest asked for another guest's reservations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guest_reservations(
    State(state): State<AppState>,
    session: Session,
    Path(guest_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&ANY_ROLE)
        .await?;

    if let Some(own_id) = caller.guest_id() {
        if own_id != guest_id {
            return Err(AuthError::AccessDenied {
                kind: ActorKind::Guest.as_str(),
                id: own_id,
                reason: format!("attempted to list reservations of guest {}", guest_id),
            }
            .into());
        }
    }

    let reservations = ReservationService::new(&state.db)
        .get_by_guest(guest_id)
        .await?;
    let reservations_dto: Vec<_> = reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reservations_dto)))
}

#[utoipa::path(
    put,
    path = "/api/reservations/{id}/status",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = UpdateReservationStatusDto,
    responses(
        (status = 200, description = "Status changed", body = ReservationDto),
        (status = 400, description = "Unknown status or transition not allowed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReservationStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&Role::STAFF)
        .await?;

    let status = payload.status.trim().parse::<ReservationStatus>()?;
    let reservation = ReservationService::new(&state.db)
        .update_status(id, status)
        .await?;

    audit(
        &state,
        caller.actor(),
        AuditCategory::Update,
        format!("Set reservation {} to {}", id, status.as_str()),
    );

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/reservations/{id}/cancel",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation cancelled", body = ReservationDto),
        (status = 400, description = "Reservation can no longer be cancelled", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Reservation belongs to another guest", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&ANY_ROLE)
        .await?;

    let reservation = ReservationService::new(&state.db)
        .cancel(id, &caller)
        .await?;

    audit(
        &state,
        caller.actor(),
        AuditCategory::Update,
        format!("Cancelled reservation {}", id),
    );

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}
