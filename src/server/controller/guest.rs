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
        auth::{
            CallerDto, ChangePasswordDto, ForgotPasswordDto, LoginDto, ResetPasswordDto,
            UpdateProfileDto,
        },
        guest::{ActivateGuestDto, GuestDto, RegisterGuestDto, ResendOtpDto},
    },
    server::{
        controller::audit,
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{require_same_guest, AuthGuard},
            session::AuthSession,
        },
        model::{
            audit::{Actor, ActorKind, AuditCategory},
            auth::{require_password, Caller, ResetPasswordParams, UpdateProfileParams},
            guest::RegisterGuestParams,
            user::Role,
        },
        service::{
            guest::GuestService,
            otp::{OtpPurpose, OtpService},
        },
        state::AppState,
    },
};

pub static GUEST_TAG: &str = "guest";

fn guest_actor(id: i32) -> Actor {
    Actor {
        kind: ActorKind::Guest,
        id,
    }
}

#[utoipa::path(
    post,
    path = "/api/guests/register",
    tag = GUEST_TAG,
    request_body = RegisterGuestDto,
    responses(
        (status = 201, description = "Guest registered, verification code mailed", body = GuestDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 409, description = "Email or phone already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_guest(
    State(state): State<AppState>,
    Json(payload): Json<RegisterGuestDto>,
) -> Result<impl IntoResponse, AppError> {
    let guest = GuestService::new(&state.db)
        .register(RegisterGuestParams::from_dto(payload)?)
        .await?;

    OtpService::new(&state.db)
        .issue_and_send(
            &guest.email,
            state.otp_ttl,
            OtpPurpose::EmailVerification,
            state.mailer.clone(),
        )
        .await?;

    audit(
        &state,
        guest_actor(guest.id),
        AuditCategory::Create,
        format!("Guest {} registered", guest.email),
    );

    Ok((StatusCode::CREATED, Json(guest.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/guests/activate",
    tag = GUEST_TAG,
    request_body = ActivateGuestDto,
    responses(
        (status = 200, description = "Guest activated", body = GuestDto),
        (status = 400, description = "Invalid or expired OTP", body = ErrorDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn activate_guest(
    State(state): State<AppState>,
    Json(payload): Json<ActivateGuestDto>,
) -> Result<impl IntoResponse, AppError> {
    let guest = GuestService::new(&state.db)
        .activate(&payload.email, &payload.otp)
        .await?;

    audit(
        &state,
        guest_actor(guest.id),
        AuditCategory::Update,
        format!("Guest {} verified their email", guest.email),
    );

    Ok((StatusCode::OK, Json(guest.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/guests/otp",
    tag = GUEST_TAG,
    request_body = ResendOtpDto,
    responses(
        (status = 200, description = "A new code was mailed", body = MessageDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 409, description = "Guest is already active", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resend_otp(
    State(state): State<AppState>,
    Json(payload): Json<ResendOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    let guest = GuestService::new(&state.db)
        .pending_activation(&payload.email)
        .await?;

    OtpService::new(&state.db)
        .issue_and_send(
            &guest.email,
            state.otp_ttl,
            OtpPurpose::EmailVerification,
            state.mailer.clone(),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "OTP sent to email".to_string(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/guests/login",
    tag = GUEST_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in as a guest", body = CallerDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 403, description = "Email not verified yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_guest(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let guest = GuestService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_guest_id(guest.id).await?;

    audit(
        &state,
        guest_actor(guest.id),
        AuditCategory::Login,
        format!("Guest {} logged in", guest.email),
    );

    Ok((StatusCode::OK, Json(Caller::Guest(guest).into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/guests",
    tag = GUEST_TAG,
    responses(
        (status = 200, description = "All guests", body = Vec<GuestDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&Role::STAFF)
        .await?;

    let guests = GuestService::new(&state.db).get_all().await?;
    let guests_dto: Vec<_> = guests.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(guests_dto)))
}

#[utoipa::path(
    get,
    path = "/api/guests/{id}",
    tag = GUEST_TAG,
    params(
        ("id" = i32, Path, description = "Guest ID")
    ),
    responses(
        (status = 200, description = "The guest", body = GuestDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Guest asked for another guest", body = ErrorDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guest(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    if let Some(guest_id) = caller.guest_id() {
        if guest_id != id {
            return Err(AuthError::AccessDenied {
                kind: ActorKind::Guest.as_str(),
                id: guest_id,
                reason: format!("attempted to read guest {}", id),
            }
            .into());
        }
    }

    let guest = GuestService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(guest.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/guests/{id}",
    tag = GUEST_TAG,
    params(
        ("id" = i32, Path, description = "Guest ID")
    ),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = GuestDto),
        (status = 400, description = "Blank field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not this guest", body = ErrorDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 409, description = "Email or phone already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_guest(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Role::Guest])
        .await?;
    require_same_guest(&caller, id)?;

    let guest = GuestService::new(&state.db)
        .update_profile(id, UpdateProfileParams::from_dto(payload)?)
        .await?;

    audit(
        &state,
        guest_actor(id),
        AuditCategory::Update,
        format!("Guest {} updated their profile", id),
    );

    Ok((StatusCode::OK, Json(guest.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/guests/{id}/password",
    tag = GUEST_TAG,
    params(
        ("id" = i32, Path, description = "Guest ID")
    ),
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "Password missing", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not this guest", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_guest_password(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Role::Guest])
        .await?;
    require_same_guest(&caller, id)?;

    let password = require_password(payload.password)?;
    GuestService::new(&state.db)
        .change_password(id, &password)
        .await?;

    audit(
        &state,
        guest_actor(id),
        AuditCategory::Update,
        format!("Guest {} changed their password", id),
    );

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password successfully updated".to_string(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/guests/forgot-password",
    tag = GUEST_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "A reset code was mailed", body = MessageDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forgot_guest_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let guest = GuestService::new(&state.db)
        .password_reset_target(&payload.email)
        .await?;

    OtpService::new(&state.db)
        .issue_and_send(
            &guest.email,
            state.otp_ttl,
            OtpPurpose::PasswordReset,
            state.mailer.clone(),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "OTP sent to email".to_string(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/guests/reset-password",
    tag = GUEST_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password reset", body = MessageDto),
        (status = 400, description = "Invalid or expired OTP, or password missing", body = ErrorDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_guest_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let guest = GuestService::new(&state.db)
        .reset_password(ResetPasswordParams::from_dto(payload)?)
        .await?;

    audit(
        &state,
        guest_actor(guest.id),
        AuditCategory::Update,
        format!("Guest {} reset their password", guest.email),
    );

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password successfully reset".to_string(),
        }),
    ))
}
