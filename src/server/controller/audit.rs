use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, audit::AuditLogDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::user::Role,
        service::audit::AuditService, state::AppState,
    },
};

pub static AUDIT_TAG: &str = "audit";

#[utoipa::path(
    get,
    path = "/api/logs",
    tag = AUDIT_TAG,
    responses(
        (status = 200, description = "All audit entries, newest first", body = Vec<AuditLogDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_logs(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Admin])
        .await?;

    let logs = AuditService::new(&state.db).get_all().await?;
    let logs_dto: Vec<_> = logs.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(logs_dto)))
}

#[utoipa::path(
    get,
    path = "/api/logs/{id}",
    tag = AUDIT_TAG,
    params(
        ("id" = i32, Path, description = "Audit entry ID")
    ),
    responses(
        (status = 200, description = "The audit entry", body = AuditLogDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_log(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Admin])
        .await?;

    let log = AuditService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(log.into_dto())))
}
