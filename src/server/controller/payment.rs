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
        payment::{PaymentDto, PaymentStatusUpdateDto, UpdatePaymentStatusDto},
    },
    server::{
        controller::audit,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{audit::AuditCategory, payment::PaymentStatus, user::Role},
        service::payment::PaymentService,
        state::AppState,
    },
};

pub static PAYMENT_TAG: &str = "payment";

#[utoipa::path(
    get,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "All payments, newest first", body = Vec<PaymentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payments(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&Role::STAFF)
        .await?;

    let payments = PaymentService::new(&state.db).get_all().await?;
    let payments_dto: Vec<_> = payments.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(payments_dto)))
}

#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "The payment", body = PaymentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&Role::STAFF)
        .await?;

    let payment = PaymentService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/payments/{id}/status",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Payment ID")
    ),
    request_body = UpdatePaymentStatusDto,
    responses(
        (status = 200, description = "Payment updated, reservation synchronized", body = PaymentStatusUpdateDto),
        (status = 400, description = "Unknown payment status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a receptionist", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_payment_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePaymentStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Role::Receptionist])
        .await?;

    let status = payload.status.trim().parse::<PaymentStatus>()?;
    let update = PaymentService::new(&state.db)
        .update_status(id, status)
        .await?;

    audit(
        &state,
        caller.actor(),
        AuditCategory::Update,
        format!(
            "Set payment {} to {}, reservation {} is {}",
            id,
            status.as_str(),
            update.payment.reservation_id,
            update.reservation_status.as_str()
        ),
    );

    Ok((StatusCode::OK, Json(update.into_dto())))
}
