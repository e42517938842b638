use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        amenity::AmenityDto,
        api::ErrorDto,
        room_type::{CreateRoomTypeDto, RoomTypeDto, UpdateRoomTypeDto},
    },
    server::{
        controller::{audit, room::CATALOG_ROLES},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            audit::AuditCategory,
            room_type::{CreateRoomTypeParams, UpdateRoomTypeParams},
            user::Role,
        },
        service::room_type::RoomTypeService,
        state::AppState,
    },
};

pub static ROOM_TYPE_TAG: &str = "room_type";

#[utoipa::path(
    post,
    path = "/api/room-types",
    tag = ROOM_TYPE_TAG,
    request_body = CreateRoomTypeDto,
    responses(
        (status = 201, description = "Room type created", body = RoomTypeDto),
        (status = 400, description = "Name missing", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller may not manage the catalog", body = ErrorDto),
        (status = 409, description = "Name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room_type(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRoomTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&CATALOG_ROLES)
        .await?;

    let room_type = RoomTypeService::new(&state.db)
        .create(CreateRoomTypeParams::from_dto(payload)?)
        .await?;

    audit(
        &state,
        caller.actor(),
        AuditCategory::Create,
        format!("Created room type {} ({})", room_type.name, room_type.id),
    );

    Ok((StatusCode::CREATED, Json(room_type.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/room-types",
    tag = ROOM_TYPE_TAG,
    responses(
        (status = 200, description = "All room types with their amenities", body = Vec<RoomTypeDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_types(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&Role::STAFF)
        .await?;

    let room_types = RoomTypeService::new(&state.db).get_all().await?;
    let room_types_dto: Vec<_> = room_types.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(room_types_dto)))
}

#[utoipa::path(
    get,
    path = "/api/room-types/{id}",
    tag = ROOM_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Room type ID")
    ),
    responses(
        (status = 200, description = "The room type", body = RoomTypeDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&Role::STAFF)
        .await?;

    let room_type = RoomTypeService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(room_type.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/room-types/{id}",
    tag = ROOM_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Room type ID")
    ),
    request_body = UpdateRoomTypeDto,
    responses(
        (status = 200, description = "Room type updated", body = RoomTypeDto),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller may not manage the catalog", body = ErrorDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 409, description = "Name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoomTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&CATALOG_ROLES)
        .await?;

    let room_type = RoomTypeService::new(&state.db)
        .update(UpdateRoomTypeParams::from_dto(id, payload)?)
        .await?;

    audit(
        &state,
        caller.actor(),
        AuditCategory::Update,
        format!("Updated room type {} ({})", room_type.name, room_type.id),
    );

    Ok((StatusCode::OK, Json(room_type.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/room-types/{id}",
    tag = ROOM_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Room type ID")
    ),
    responses(
        (status = 204, description = "Room type deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller may not manage the catalog", body = ErrorDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 409, description = "Room type is used by rooms", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&CATALOG_ROLES)
        .await?;

    RoomTypeService::new(&state.db).delete(id).await?;

    audit(
        &state,
        caller.actor(),
        AuditCategory::Delete,
        format!("Deleted room type {}", id),
    );

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/room-types/{id}/amenities",
    tag = ROOM_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Room type ID")
    ),
    responses(
        (status = 200, description = "Amenities of the room type", body = Vec<AmenityDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_type_amenities(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&Role::STAFF)
        .await?;

    let amenities = RoomTypeService::new(&state.db).get_amenities(id).await?;
    let amenities_dto: Vec<_> = amenities.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(amenities_dto)))
}

#[utoipa::path(
    post,
    path = "/api/room-types/{id}/amenities/{amenity_id}",
    tag = ROOM_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Room type ID"),
        ("amenity_id" = i32, Path, description = "Amenity ID"),
    ),
    responses(
        (status = 200, description = "Amenity linked", body = RoomTypeDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller may not manage the catalog", body = ErrorDto),
        (status = 404, description = "Room type or amenity not found", body = ErrorDto),
        (status = 409, description = "Amenity already linked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn link_amenity(
    State(state): State<AppState>,
    session: Session,
    Path((id, amenity_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&CATALOG_ROLES)
        .await?;

    let room_type = RoomTypeService::new(&state.db)
        .link_amenity(id, amenity_id)
        .await?;

    audit(
        &state,
        caller.actor(),
        AuditCategory::Update,
        format!("Linked amenity {} to room type {}", amenity_id, id),
    );

    Ok((StatusCode::OK, Json(room_type.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/room-types/{id}/amenities/{amenity_id}",
    tag = ROOM_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Room type ID"),
        ("amenity_id" = i32, Path, description = "Amenity ID"),
    ),
    responses(
        (status = 200, description = "Amenity unlinked", body = RoomTypeDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller may not manage the catalog", body = ErrorDto),
        (status = 404, description = "Amenity is not linked to the room type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unlink_amenity(
    State(state): State<AppState>,
    session: Session,
    Path((id, amenity_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&CATALOG_ROLES)
        .await?;

    let room_type = RoomTypeService::new(&state.db)
        .unlink_amenity(id, amenity_id)
        .await?;

    audit(
        &state,
        caller.actor(),
        AuditCategory::Update,
        format!("Unlinked amenity {} from room type {}", amenity_id, id),
    );

    Ok((StatusCode::OK, Json(room_type.into_dto())))
}
