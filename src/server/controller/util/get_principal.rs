use axum_extra::extract::CookieJar;
use tower_sessions::Session;

use crate::server::{
    data::principal::Credentials,
    error::{auth::AuthError, Error},
    model::{app::AppState, auth::Guard},
    service::auth::AuthService,
};

/// Retrieves the principal authenticated on `guard` from session or remember cookie
///
/// # Returns
/// - `Ok(Credentials)` - Authenticated principal
/// - `Err(AuthError::Unauthenticated)` - Nobody is logged in on this guard
/// - `Err(Error)` - Internal errors (database query failures, session errors, etc.)
pub async fn require_principal(
    state: &AppState,
    session: &Session,
    jar: &CookieJar,
    guard: Guard,
) -> Result<Credentials, Error> {
    AuthService::new(&state.db, &state.hasher, &state.throttle)
        .user(guard, session, jar)
        .await?
        .ok_or_else(|| AuthError::Unauthenticated(guard).into())
}

/// Like [`require_principal`] but also requires a verified email address
///
/// # Returns
/// - `Ok(Credentials)` - Authenticated and verified principal
/// - `Err(AuthError::Unauthenticated)` - Nobody is logged in on this guard
/// - `Err(AuthError::EmailNotVerified)` - Principal has not verified their email yet
pub async fn require_verified(
    state: &AppState,
    session: &Session,
    jar: &CookieJar,
    guard: Guard,
) -> Result<Credentials, Error> {
    let principal = require_principal(state, session, jar, guard).await?;

    if !principal.is_verified() {
        return Err(AuthError::EmailNotVerified(guard, principal.id).into());
    }

    Ok(principal)
}
