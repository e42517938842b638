use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        amenity::{AmenityDto, CreateAmenityDto, UpdateAmenityDto},
        api::ErrorDto,
    },
    server::{
        controller::{audit, room::CATALOG_ROLES},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            amenity::{CreateAmenityParams, UpdateAmenityParams},
            audit::AuditCategory,
            user::Role,
        },
        service::amenity::AmenityService,
        state::AppState,
    },
};

pub static AMENITY_TAG: &str = "amenity";

#[utoipa::path(
    post,
    path = "/api/amenities",
    tag = AMENITY_TAG,
    request_body = CreateAmenityDto,
    responses(
        (status = 201, description = "Amenity created", body = AmenityDto),
        (status = 400, description = "Name missing", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller may not manage the catalog", body = ErrorDto),
        (status = 409, description = "Name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_amenity(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAmenityDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&CATALOG_ROLES)
        .await?;

    let amenity = AmenityService::new(&state.db)
        .create(CreateAmenityParams::from_dto(payload)?)
        .await?;

    audit(
        &state,
        caller.actor(),
        AuditCategory::Create,
        format!("Created amenity {} ({})", amenity.name, amenity.id),
    );

    Ok((StatusCode::CREATED, Json(amenity.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/amenities",
    tag = AMENITY_TAG,
    responses(
        (status = 200, description = "All amenities", body = Vec<AmenityDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_amenities(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&Role::STAFF)
        .await?;

    let amenities = AmenityService::new(&state.db).get_all().await?;
    let amenities_dto: Vec<_> = amenities.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(amenities_dto)))
}

#[utoipa::path(
    get,
    path = "/api/amenities/{id}",
    tag = AMENITY_TAG,
    params(
        ("id" = i32, Path, description = "Amenity ID")
    ),
    responses(
        (status = 200, description = "The amenity", body = AmenityDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Amenity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_amenity(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&Role::STAFF)
        .await?;

    let amenity = AmenityService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(amenity.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/amenities/{id}",
    tag = AMENITY_TAG,
    params(
        ("id" = i32, Path, description = "Amenity ID")
    ),
    request_body = UpdateAmenityDto,
    responses(
        (status = 200, description = "Amenity updated", body = AmenityDto),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller may not manage the catalog", body = ErrorDto),
        (status = 404, description = "Amenity not found", body = ErrorDto),
        (status = 409, description = "Name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_amenity(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAmenityDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&CATALOG_ROLES)
        .await?;

    let amenity = AmenityService::new(&state.db)
        .update(UpdateAmenityParams::from_dto(id, payload)?)
        .await?;

    audit(
        &state,
        caller.actor(),
        AuditCategory::Update,
        format!("Updated amenity {} ({})", amenity.name, amenity.id),
    );

    Ok((StatusCode::OK, Json(amenity.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/amenities/{id}",
    tag = AMENITY_TAG,
    params(
        ("id" = i32, Path, description = "Amenity ID")
    ),
    responses(
        (status = 204, description = "Amenity deleted and unlinked from every room type"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller may not manage the catalog", body = ErrorDto),
        (status = 404, description = "Amenity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_amenity(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&CATALOG_ROLES)
        .await?;

    AmenityService::new(&state.db).delete(id).await?;

    audit(
        &state,
        caller.actor(),
        AuditCategory::Delete,
        format!("Deleted amenity {}", id),
    );

    Ok(StatusCode::NO_CONTENT)
}
