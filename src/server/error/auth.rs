use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::{
    error::{error_response, validation::ValidationError},
    model::auth::Guard,
};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No {0} is authenticated for this request")]
    Unauthenticated(Guard),
    #[error("Invalid credentials supplied for the {0} guard")]
    InvalidCredentials(Guard),
    #[error("Too many login attempts for the {guard} guard, retry in {seconds} seconds")]
    TooManyAttempts { guard: Guard, seconds: u64 },
    #[error("{0} ID {1} has not verified their email address")]
    EmailNotVerified(Guard, i32),
    #[error("Email verification token is unknown, expired, or belongs to another guard")]
    InvalidVerificationToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthenticated(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Unauthenticated.")
            }
            Self::InvalidCredentials(_) => {
                tracing::debug!("{}", self);

                // Reported against the email field like any other form error
                ValidationError::field("email", "These credentials do not match our records.")
                    .into_response()
            }
            Self::TooManyAttempts { seconds, .. } => {
                tracing::warn!("{}", self);

                error_response(
                    StatusCode::TOO_MANY_REQUESTS,
                    format!(
                        "Too many login attempts. Please try again in {} seconds.",
                        seconds
                    ),
                )
            }
            Self::EmailNotVerified(_, _) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::FORBIDDEN, "Your email address is not verified.")
            }
            Self::InvalidVerificationToken => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::BAD_REQUEST,
                    "This verification link is invalid or has expired.",
                )
            }
        }
    }
}
