use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{CallerDto, ForgotPasswordDto, LoginDto, ResetPasswordDto},
    },
    server::{
        controller::audit,
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::{
            audit::{Actor, ActorKind, AuditCategory},
            auth::{Caller, ResetPasswordParams},
        },
        service::{
            otp::{OtpPurpose, OtpService},
            user::UserService,
        },
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in as a staff user", body = CallerDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 403, description = "Account is blocked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    audit(
        &state,
        Actor {
            kind: ActorKind::User,
            id: user.id,
        },
        AuditCategory::Login,
        format!("Staff user {} logged in", user.email),
    );

    Ok((StatusCode::OK, Json(Caller::Staff(user).into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The authenticated staff user or guest", body = CallerDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Account is blocked or not activated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_caller(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(caller.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "A reset code was mailed", body = MessageDto),
        (status = 404, description = "No staff account uses the email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .password_reset_target(&payload.email)
        .await?;

    OtpService::new(&state.db)
        .issue_and_send(
            &user.email,
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
    path = "/api/auth/reset-password",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password reset", body = MessageDto),
        (status = 400, description = "Invalid or expired OTP, or password missing", body = ErrorDto),
        (status = 404, description = "No staff account uses the email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .reset_password(ResetPasswordParams::from_dto(payload)?)
        .await?;

    audit(
        &state,
        Actor {
            kind: ActorKind::User,
            id: user.id,
        },
        AuditCategory::Update,
        format!("Staff user {} reset their password", user.email),
    );

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password successfully reset".to_string(),
        }),
    ))
}
