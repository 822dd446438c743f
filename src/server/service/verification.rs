//! Email verification.
//!
//! Each principal has at most one outstanding token. Issuing a token replaces older ones and mails
//! a link back to the guard's verify route.

use chrono::{Duration, NaiveDateTime};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        email_verification::EmailVerificationRepository,
        principal::{Credentials, PrincipalRepository},
    },
    error::{auth::AuthError, Error},
    mail::Mailer,
    model::auth::Guard,
    util::token::{random_string, VERIFICATION_TOKEN_LENGTH},
};

/// Minutes a verification link stays valid
pub const VERIFICATION_EXPIRY_MINUTES: i64 = 60;

pub struct VerificationService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a Mailer,
    app_url: &'a str,
}

impl<'a> VerificationService<'a> {
    /// Creates a new instance of [`VerificationService`]
    pub fn new(db: &'a DatabaseConnection, mailer: &'a Mailer, app_url: &'a str) -> Self {
        Self {
            db,
            mailer,
            app_url,
        }
    }

    /// Replaces the principal's outstanding token and mails the new verification link
    pub async fn issue(
        &self,
        guard: Guard,
        principal: &Credentials,
        now: NaiveDateTime,
    ) -> Result<(), Error> {
        let repo = EmailVerificationRepository::new(self.db);

        repo.delete_for_principal(guard.principal(), principal.id)
            .await?;

        let token = random_string(VERIFICATION_TOKEN_LENGTH);
        repo.create(
            guard.principal(),
            principal.id,
            token.clone(),
            now + Duration::minutes(VERIFICATION_EXPIRY_MINUTES),
            now,
        )
        .await?;

        let link = format!(
            "{}/api/{}/email/verify?token={}",
            self.app_url,
            guard.name(),
            token
        );
        let body = format!(
            "Hello {},\n\nPlease click the link below to verify your email address.\n\n{}\n\n\
             This link expires in {} minutes. If you did not create an account, no further action is required.\n",
            principal.name, link, VERIFICATION_EXPIRY_MINUTES
        );

        self.mailer
            .send(&principal.email, "Verify Email Address", &body)?;

        tracing::info!(guard = %guard, principal_id = principal.id, "Issued email verification");

        Ok(())
    }

    /// Verifies the principal owning `token` on `guard`
    ///
    /// # Returns
    /// - `Ok(Credentials)` - Principal is now verified, the token is consumed
    /// - `Err(AuthError::InvalidVerificationToken)` - Unknown token, other guard, or expired
    pub async fn verify(
        &self,
        guard: Guard,
        token: &str,
        now: NaiveDateTime,
    ) -> Result<Credentials, Error> {
        let repo = EmailVerificationRepository::new(self.db);

        let Some(verification) = repo.find_by_token(token).await? else {
            return Err(AuthError::InvalidVerificationToken.into());
        };

        if Guard::from(verification.principal) != guard {
            return Err(AuthError::InvalidVerificationToken.into());
        }

        if verification.expires_at <= now {
            repo.delete_for_principal(verification.principal, verification.principal_id)
                .await?;

            return Err(AuthError::InvalidVerificationToken.into());
        }

        let Some(principal) = PrincipalRepository::new(self.db, guard)
            .mark_email_verified(verification.principal_id, now)
            .await?
        else {
            return Err(AuthError::InvalidVerificationToken.into());
        };

        repo.delete_for_principal(verification.principal, verification.principal_id)
            .await?;

        tracing::info!(guard = %guard, principal_id = principal.id, "Verified email address");

        Ok(principal)
    }

    /// Sends a new link unless the principal is already verified
    ///
    /// # Returns
    /// - `Ok(true)` - A new link was sent
    /// - `Ok(false)` - Already verified, nothing sent
    pub async fn resend(
        &self,
        guard: Guard,
        principal: &Credentials,
        now: NaiveDateTime,
    ) -> Result<bool, Error> {
        if principal.is_verified() {
            return Ok(false);
        }

        self.issue(guard, principal, now).await?;

        Ok(true)
    }
}
