use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::CookieJar;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        applicant::ApplicantDto,
        company::{LoginDto, RegisterDto},
    },
    server::{
        controller::{
            applicant::APPLICANT_TAG,
            company::auth::VerifyEmailParams,
            util::{get_principal::require_principal, guard_auth},
        },
        error::Error,
        model::{app::AppState, auth::Guard},
    },
};

/// Register an applicant account
///
/// Logs the new applicant in and mails an email verification link.
#[utoipa::path(
    post,
    path = "/api/applicant/register",
    tag = APPLICANT_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Applicant registered and logged in", body = ApplicantDto),
        (status = 422, description = "Invalid registration or email already taken", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    Json(dto): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let (applicant, jar) =
        guard_auth::register(&state, &session, jar, Guard::Applicant, dto).await?;

    Ok((StatusCode::CREATED, jar, Json(ApplicantDto::from(applicant))))
}

/// Log an applicant in
#[utoipa::path(
    post,
    path = "/api/applicant/login",
    tag = APPLICANT_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in, a remember cookie is set when requested", body = ApplicantDto),
        (status = 422, description = "Credentials do not match our records", body = ValidationErrorDto),
        (status = 429, description = "Too many login attempts", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let (applicant, jar) = guard_auth::login(&state, &session, jar, Guard::Applicant, dto).await?;

    Ok((jar, Json(ApplicantDto::from(applicant))))
}

/// Log the applicant out
#[utoipa::path(
    post,
    path = "/api/applicant/logout",
    tag = APPLICANT_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    let jar = guard_auth::logout(&state, &session, jar, Guard::Applicant).await?;

    Ok((StatusCode::NO_CONTENT, jar))
}

/// Get the authenticated applicant
#[utoipa::path(
    get,
    path = "/api/applicant/me",
    tag = APPLICANT_TAG,
    responses(
        (status = 200, description = "Authenticated applicant", body = ApplicantDto),
        (status = 401, description = "No applicant is logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    let applicant = require_principal(&state, &session, &jar, Guard::Applicant).await?;

    Ok(Json(ApplicantDto::from(applicant)))
}

/// Verify an applicant email address from the mailed link
#[utoipa::path(
    get,
    path = "/api/applicant/email/verify",
    tag = APPLICANT_TAG,
    params(VerifyEmailParams),
    responses(
        (status = 200, description = "Email address verified", body = ApplicantDto),
        (status = 400, description = "Link is invalid or has expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_email(
    State(state): State<AppState>,
    Query(params): Query<VerifyEmailParams>,
) -> Result<impl IntoResponse, Error> {
    let applicant = guard_auth::verify_email(&state, Guard::Applicant, &params.token).await?;

    Ok(Json(ApplicantDto::from(applicant)))
}

/// Resend the applicant's email verification link
#[utoipa::path(
    post,
    path = "/api/applicant/email/resend",
    tag = APPLICANT_TAG,
    responses(
        (status = 202, description = "A new verification link was sent"),
        (status = 204, description = "Email address is already verified"),
        (status = 401, description = "No applicant is logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resend_verification(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    guard_auth::resend_verification(&state, &session, &jar, Guard::Applicant).await
}
