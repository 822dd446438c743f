//! Authentication flows shared by the company and applicant controllers.
//!
//! The routes of both guards have the same shape, only the guard and the response body differ.

use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::company::{LoginDto, RegisterDto},
    server::{
        controller::util::get_principal::require_principal,
        data::principal::Credentials,
        error::{validation::ValidationError, Error},
        model::{app::AppState, auth::Guard},
        service::{auth::AuthService, verification::VerificationService},
        util::time::now,
    },
};

/// Registers and logs in a principal, then mails the verification link
pub async fn register(
    state: &AppState,
    session: &Session,
    jar: CookieJar,
    guard: Guard,
    dto: RegisterDto,
) -> Result<(Credentials, CookieJar), Error> {
    let dto = RegisterDto {
        name: dto.name.trim().to_string(),
        email: dto.email.trim().to_string(),
        ..dto
    };
    dto.validate().map_err(ValidationError::from)?;

    let auth_service = AuthService::new(&state.db, &state.hasher, &state.throttle);

    let principal = auth_service
        .register(guard, &dto.name, &dto.email, &dto.password)
        .await?;
    let jar = auth_service
        .login(guard, session, jar, &principal, false)
        .await?;

    VerificationService::new(&state.db, &state.mailer, &state.app_url)
        .issue(guard, &principal, now())
        .await?;

    Ok((principal, jar))
}

pub async fn login(
    state: &AppState,
    session: &Session,
    jar: CookieJar,
    guard: Guard,
    dto: LoginDto,
) -> Result<(Credentials, CookieJar), Error> {
    dto.validate().map_err(ValidationError::from)?;

    AuthService::new(&state.db, &state.hasher, &state.throttle)
        .attempt(guard, session, jar, &dto.email, &dto.password, dto.remember)
        .await
}

pub async fn logout(
    state: &AppState,
    session: &Session,
    jar: CookieJar,
    guard: Guard,
) -> Result<CookieJar, Error> {
    AuthService::new(&state.db, &state.hasher, &state.throttle)
        .logout(guard, session, jar)
        .await
}

pub async fn verify_email(state: &AppState, guard: Guard, token: &str) -> Result<Credentials, Error> {
    VerificationService::new(&state.db, &state.mailer, &state.app_url)
        .verify(guard, token, now())
        .await
}

/// Resends the verification link to the authenticated principal
///
/// # Returns
/// - `202 Accepted` - A new link was sent
/// - `204 No Content` - Already verified
pub async fn resend_verification(
    state: &AppState,
    session: &Session,
    jar: &CookieJar,
    guard: Guard,
) -> Result<StatusCode, Error> {
    let principal = require_principal(state, session, jar, guard).await?;

    let sent = VerificationService::new(&state.db, &state.mailer, &state.app_url)
        .resend(guard, &principal, now())
        .await?;

    Ok(if sent {
        StatusCode::ACCEPTED
    } else {
        StatusCode::NO_CONTENT
    })
}
