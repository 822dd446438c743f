//! Authentication service layer.
//!
//! Implements login, recall, logout, and registration for both guards. Each guard keeps its
//! principal ID under its own session key and its own remember cookie, so the guards never
//! interfere with each other even though they share one session.

pub mod password;
pub mod throttle;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::principal::{Credentials, PrincipalRepository},
    error::{auth::AuthError, validation::ValidationError, Error},
    model::{auth::Guard, session::principal::SessionPrincipalId},
    service::auth::{
        password::{constant_time_eq, PasswordHasher},
        throttle::LoginThrottle,
    },
    util::{
        time::now,
        token::{random_string, REMEMBER_TOKEN_LENGTH},
    },
};

/// Lifetime of the remember cookie
const REMEMBER_COOKIE_DAYS: i64 = 400;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    hasher: &'a PasswordHasher,
    throttle: &'a LoginThrottle,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(
        db: &'a DatabaseConnection,
        hasher: &'a PasswordHasher,
        throttle: &'a LoginThrottle,
    ) -> Self {
        Self {
            db,
            hasher,
            throttle,
        }
    }

    /// Attempts to log a principal in on `guard`.
    ///
    /// On success the session ID is cycled and the principal ID stored under the guard's key.
    /// With `remember` set a fresh remember token is stored on the principal and returned in a
    /// long-lived cookie.
    ///
    /// # Returns
    /// - `Ok((Credentials, CookieJar))` - Logged in principal and the cookie jar to respond with
    /// - `Err(AuthError::TooManyAttempts)` - Throttle exhausted for this guard and email
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(Error)` - Database, session, or hashing task failure
    pub async fn attempt(
        &self,
        guard: Guard,
        session: &Session,
        jar: CookieJar,
        email: &str,
        password: &str,
        remember: bool,
    ) -> Result<(Credentials, CookieJar), Error> {
        tracing::info!(guard = %guard, email = %email, remember, "Attempting login");

        let throttle_key = LoginThrottle::key(guard, email);
        if let Some(seconds) = self.throttle.available_in(&throttle_key) {
            return Err(AuthError::TooManyAttempts { guard, seconds }.into());
        }

        let principal = PrincipalRepository::new(self.db, guard)
            .find_by_email(email)
            .await?;

        let verified = match &principal {
            Some(principal) => {
                self.hasher
                    .verify_async(password, &principal.password_hash)
                    .await?
            }
            None => false,
        };

        let principal = match principal {
            Some(principal) if verified => principal,
            _ => {
                self.throttle.hit(&throttle_key);
                tracing::info!(guard = %guard, email = %email, "Failed login attempt");

                return Err(AuthError::InvalidCredentials(guard).into());
            }
        };

        self.throttle.clear(&throttle_key);

        let jar = self.login(guard, session, jar, &principal, remember).await?;

        tracing::info!(guard = %guard, principal_id = principal.id, "Logged in");

        Ok((principal, jar))
    }

    /// Establishes an authenticated session for an already verified principal
    pub async fn login(
        &self,
        guard: Guard,
        session: &Session,
        jar: CookieJar,
        principal: &Credentials,
        remember: bool,
    ) -> Result<CookieJar, Error> {
        // Prevent session fixation, the other guard's key survives the cycle
        session.cycle_id().await?;
        SessionPrincipalId::insert(session, guard, principal.id).await?;

        if !remember {
            return Ok(jar);
        }

        let token = random_string(REMEMBER_TOKEN_LENGTH);
        PrincipalRepository::new(self.db, guard)
            .set_remember_token(principal.id, Some(token.clone()))
            .await?;

        Ok(jar.add(remember_cookie(guard, principal.id, &token)))
    }

    /// Resolves the principal authenticated on `guard`.
    ///
    /// Falls back to the remember cookie when the session has no principal for the guard, a valid
    /// recall re-establishes the session key. A session key pointing at a deleted principal is
    /// removed.
    ///
    /// # Returns
    /// - `Ok(Some(Credentials))` - Authenticated principal
    /// - `Ok(None)` - Nobody is authenticated on this guard
    /// - `Err(Error)` - Database or session failure
    pub async fn user(
        &self,
        guard: Guard,
        session: &Session,
        jar: &CookieJar,
    ) -> Result<Option<Credentials>, Error> {
        let repo = PrincipalRepository::new(self.db, guard);

        if let Some(principal_id) = SessionPrincipalId::get(session, guard).await? {
            if let Some(principal) = repo.find_by_id(principal_id).await? {
                return Ok(Some(principal));
            }

            SessionPrincipalId::remove(session, guard).await?;

            tracing::debug!(
                "Removed {} ID {} from session, it no longer exists in the database",
                guard,
                principal_id
            );

            return Ok(None);
        }

        let Some((principal_id, token)) = jar
            .get(guard.remember_cookie())
            .and_then(|cookie| parse_remember_cookie(cookie.value()))
        else {
            return Ok(None);
        };

        let Some(principal) = repo.find_by_id(principal_id).await? else {
            return Ok(None);
        };

        let valid = principal
            .remember_token
            .as_deref()
            .is_some_and(|stored| constant_time_eq(stored.as_bytes(), token.as_bytes()));

        if !valid {
            tracing::debug!("Rejected remember cookie for {} ID {}", guard, principal_id);

            return Ok(None);
        }

        session.cycle_id().await?;
        SessionPrincipalId::insert(session, guard, principal.id).await?;

        tracing::info!(guard = %guard, principal_id = principal.id, "Recalled login from remember cookie");

        Ok(Some(principal))
    }

    /// Logs `guard` out.
    ///
    /// Revokes the principal's remember token and removes the remember cookie. The session is
    /// only flushed once no other guard remains logged in.
    pub async fn logout(
        &self,
        guard: Guard,
        session: &Session,
        jar: CookieJar,
    ) -> Result<CookieJar, Error> {
        let principal_id = SessionPrincipalId::get(session, guard).await?;

        SessionPrincipalId::remove(session, guard).await?;

        if let Some(principal_id) = principal_id {
            PrincipalRepository::new(self.db, guard)
                .set_remember_token(principal_id, None)
                .await?;

            tracing::info!(guard = %guard, principal_id, "Logged out");
        }

        let mut other_guard_active = false;
        for other in guard.others() {
            if SessionPrincipalId::get(session, other).await?.is_some() {
                other_guard_active = true;
            }
        }

        if !other_guard_active {
            session.flush().await?;
        }

        Ok(jar.remove(Cookie::build(guard.remember_cookie()).path("/")))
    }

    /// Registers a principal on `guard` with a hashed password
    ///
    /// # Returns
    /// - `Ok(Credentials)` - Newly created, unverified principal
    /// - `Err(ValidationError)` - Email already registered on this guard
    pub async fn register(
        &self,
        guard: Guard,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Credentials, Error> {
        let repo = PrincipalRepository::new(self.db, guard);

        if repo.find_by_email(email).await?.is_some() {
            return Err(ValidationError::field("email", "The email has already been taken.").into());
        }

        let password_hash = self.hasher.hash_async(password).await?;
        let principal = repo.create(name, email, password_hash, now()).await?;

        tracing::info!(guard = %guard, principal_id = principal.id, "Registered");

        Ok(principal)
    }
}

fn remember_cookie(guard: Guard, principal_id: i32, token: &str) -> Cookie<'static> {
    Cookie::build((
        guard.remember_cookie(),
        format!("{}|{}", principal_id, token),
    ))
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax)
    .secure(!cfg!(debug_assertions))
    .max_age(time::Duration::days(REMEMBER_COOKIE_DAYS))
    .build()
}

/// Splits a remember cookie value into principal ID and token
fn parse_remember_cookie(value: &str) -> Option<(i32, String)> {
    let (id, token) = value.split_once('|')?;

    if token.is_empty() {
        return None;
    }

    Some((id.parse().ok()?, token.to_string()))
}
