use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{ChangePasswordDto, UpdateProfileDto},
        user::{CreateUserDto, UpdateUserStatusDto, UserDto},
    },
    server::{
        controller::audit,
        error::AppError,
        middleware::auth::{require_self_or_admin, AuthGuard},
        model::{
            audit::AuditCategory,
            auth::{require_password, UpdateProfileParams},
            user::{CreateUserParams, Role, UserStatus},
        },
        service::user::UserService,
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Staff account created", body = UserDto),
        (status = 400, description = "Missing field or invalid role", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "Email or phone already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Role::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .create(CreateUserParams::from_dto(payload)?)
        .await?;

    audit(
        &state,
        caller.actor(),
        AuditCategory::Create,
        format!("Created {} account {}", user.role.as_str(), user.id),
    );

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All staff accounts", body = Vec<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Admin])
        .await?;

    let users = UserService::new(&state.db).get_all().await?;
    let users_dto: Vec<_> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Staff user ID")
    ),
    responses(
        (status = 200, description = "The staff account", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Admin])
        .await?;

    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}/status",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Staff user ID")
    ),
    request_body = UpdateUserStatusDto,
    responses(
        (status = 200, description = "Status changed", body = UserDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Role::Admin])
        .await?;

    let status = payload.status.trim().parse::<UserStatus>()?;
    let user = UserService::new(&state.db).set_status(id, status).await?;

    audit(
        &state,
        caller.actor(),
        AuditCategory::Update,
        format!("Set staff account {} to {}", id, status.as_str()),
    );

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Staff user ID")
    ),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Blank field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is neither the account owner nor an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email or phone already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&Role::STAFF)
        .await?;
    require_self_or_admin(&caller, id)?;

    let user = UserService::new(&state.db)
        .update_profile(id, UpdateProfileParams::from_dto(payload)?)
        .await?;

    audit(
        &state,
        caller.actor(),
        AuditCategory::Update,
        format!("Updated profile of staff account {}", id),
    );

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}/password",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Staff user ID")
    ),
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "Password missing", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is neither the account owner nor an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_user_password(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&Role::STAFF)
        .await?;
    require_self_or_admin(&caller, id)?;

    let password = require_password(payload.password)?;
    UserService::new(&state.db)
        .change_password(id, &password)
        .await?;

    audit(
        &state,
        caller.actor(),
        AuditCategory::Update,
        format!("Changed password of staff account {}", id),
    );

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password successfully updated".to_string(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Staff user ID")
    ),
    responses(
        (status = 200, description = "Account deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Admin tried to delete their own account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Role::Admin])
        .await?;

    let actor = caller.actor();
    let user = UserService::new(&state.db).delete(id, actor.id).await?;

    audit(
        &state,
        actor,
        AuditCategory::Delete,
        format!(
            "Deleted staff account {} ({} {})",
            id, user.first_name, user.last_name
        ),
    );

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "User deleted".to_string(),
        }),
    ))
}
