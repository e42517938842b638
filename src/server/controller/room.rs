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
        room::{AvailableRoomDto, CreateRoomDto, RoomDto, UpdateRoomDto},
    },
    server::{
        controller::audit,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            audit::AuditCategory,
            room::{CreateRoomParams, UpdateRoomParams},
            user::Role,
        },
        service::room::RoomService,
        state::AppState,
    },
};

pub static ROOM_TAG: &str = "room";

/// Roles allowed to change the room catalog.
pub(crate) const CATALOG_ROLES: [Role; 2] = [Role::Admin, Role::RoomManager];

#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = ROOM_TAG,
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Room created", body = RoomDto),
        (status = 400, description = "Invalid room data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller may not manage rooms", body = ErrorDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 409, description = "Room number already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&CATALOG_ROLES)
        .await?;

    let room = RoomService::new(&state.db)
        .create(CreateRoomParams::from_dto(payload)?)
        .await?;

    audit(
        &state,
        caller.actor(),
        AuditCategory::Create,
        format!("Created room {} ({})", room.room_number, room.id),
    );

    Ok((StatusCode::CREATED, Json(room.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "All rooms with their room types", body = Vec<RoomDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&Role::STAFF)
        .await?;

    let rooms = RoomService::new(&state.db).get_all().await?;
    let rooms_dto: Vec<_> = rooms.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(rooms_dto)))
}

/// Public listing used by the booking page; no login required.
#[utoipa::path(
    get,
    path = "/api/rooms/available",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "Bookable rooms with the days already reserved", body = Vec<AvailableRoomDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_rooms(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db).get_available().await?;
    let rooms_dto: Vec<_> = rooms.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(rooms_dto)))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "The room", body = RoomDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&Role::STAFF)
        .await?;

    let room = RoomService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "Room updated", body = RoomDto),
        (status = 400, description = "Invalid room data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller may not manage rooms", body = ErrorDto),
        (status = 404, description = "Room or room type not found", body = ErrorDto),
        (status = 409, description = "Room number already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&CATALOG_ROLES)
        .await?;

    let room = RoomService::new(&state.db)
        .update(UpdateRoomParams::from_dto(id, payload)?)
        .await?;

    audit(
        &state,
        caller.actor(),
        AuditCategory::Update,
        format!("Updated room {} ({})", room.room_number, room.id),
    );

    Ok((StatusCode::OK, Json(room.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller may not manage rooms", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 409, description = "Room has reservations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&CATALOG_ROLES)
        .await?;

    RoomService::new(&state.db).delete(id).await?;

    audit(
        &state,
        caller.actor(),
        AuditCategory::Delete,
        format!("Deleted room {}", id),
    );

    Ok(StatusCode::NO_CONTENT)
}
