use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        company::{CompanyDto, LoginDto, RegisterDto},
    },
    server::{
        controller::{
            company::COMPANY_TAG,
            util::{get_principal::require_principal, guard_auth},
        },
        error::Error,
        model::{app::AppState, auth::Guard},
        service::company::CompanyService,
    },
};

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VerifyEmailParams {
    pub token: String,
}

/// Register a company account
///
/// Logs the new company in and mails an email verification link.
#[utoipa::path(
    post,
    path = "/api/company/register",
    tag = COMPANY_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Company registered and logged in", body = CompanyDto),
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
    let (company, jar) = guard_auth::register(&state, &session, jar, Guard::Company, dto).await?;

    let profile = CompanyService::new(&state.db, &state.storage)
        .profile(company.id)
        .await?;

    Ok((StatusCode::CREATED, jar, Json(profile)))
}

/// Log a company in
#[utoipa::path(
    post,
    path = "/api/company/login",
    tag = COMPANY_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in, a remember cookie is set when requested", body = CompanyDto),
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
    let (company, jar) = guard_auth::login(&state, &session, jar, Guard::Company, dto).await?;

    let profile = CompanyService::new(&state.db, &state.storage)
        .profile(company.id)
        .await?;

    Ok((jar, Json(profile)))
}

/// Log the company out
///
/// Revokes the remember token. An applicant logged in on the same session stays logged in.
#[utoipa::path(
    post,
    path = "/api/company/logout",
    tag = COMPANY_TAG,
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
    let jar = guard_auth::logout(&state, &session, jar, Guard::Company).await?;

    Ok((StatusCode::NO_CONTENT, jar))
}

/// Get the authenticated company
#[utoipa::path(
    get,
    path = "/api/company/me",
    tag = COMPANY_TAG,
    responses(
        (status = 200, description = "Authenticated company", body = CompanyDto),
        (status = 401, description = "No company is logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    let company = require_principal(&state, &session, &jar, Guard::Company).await?;

    let profile = CompanyService::new(&state.db, &state.storage)
        .profile(company.id)
        .await?;

    Ok(Json(profile))
}

/// Verify a company email address from the mailed link
#[utoipa::path(
    get,
    path = "/api/company/email/verify",
    tag = COMPANY_TAG,
    params(VerifyEmailParams),
    responses(
        (status = 200, description = "Email address verified", body = CompanyDto),
        (status = 400, description = "Link is invalid or has expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_email(
    State(state): State<AppState>,
    Query(params): Query<VerifyEmailParams>,
) -> Result<impl IntoResponse, Error> {
    let company = guard_auth::verify_email(&state, Guard::Company, &params.token).await?;

    let profile = CompanyService::new(&state.db, &state.storage)
        .profile(company.id)
        .await?;

    Ok(Json(profile))
}

/// Resend the company's email verification link
#[utoipa::path(
    post,
    path = "/api/company/email/resend",
    tag = COMPANY_TAG,
    responses(
        (status = 202, description = "A new verification link was sent"),
        (status = 204, description = "Email address is already verified"),
        (status = 401, description = "No company is logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resend_verification(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    guard_auth::resend_verification(&state, &session, &jar, Guard::Company).await
}
