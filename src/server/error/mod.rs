//! Error types for the Hireboard server application.
//!
//! This module provides the error handling system with specialized error types for each domain
//! (authentication, authorization, configuration, request validation, job listings, career pages,
//! and the image pipeline). All errors implement `IntoResponse` for Axum HTTP responses and use
//! `thiserror` for `Display` and `Error` implementations.

pub mod auth;
pub mod career;
pub mod config;
pub mod image;
pub mod listing;
pub mod policy;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, career::CareerPageError, config::ConfigError, image::ImageError,
        listing::ListingError, policy::PolicyError, validation::ValidationError,
    },
};

/// Main error type for the Hireboard server application.
///
/// Aggregates all domain-specific error types and external library errors into a single error
/// type so handlers and services can use the `?` operator throughout. The `IntoResponse`
/// implementation maps domain errors to their HTTP status and everything else to a logged 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (credentials, throttling, unverified email).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Authorization error raised by a policy.
    #[error(transparent)]
    PolicyError(#[from] PolicyError),
    /// Request validation error.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Job listing and application error (missing listing, invalid status change, duplicates).
    #[error(transparent)]
    ListingError(#[from] ListingError),
    /// Career page error (missing page or image).
    #[error(transparent)]
    CareerPageError(#[from] CareerPageError),
    /// Image pipeline error (decode, encode, disk write).
    #[error(transparent)]
    ImageError(#[from] ImageError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Hireboard's code.
    #[error("Internal error with Hireboard's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// Multipart request body could not be read.
    #[error(transparent)]
    MultipartError(#[from] axum::extract::multipart::MultipartError),
    /// Mail transport error (SMTP connection, delivery).
    #[error(transparent)]
    MailError(#[from] lettre::transport::smtp::Error),
    /// Mail message could not be built.
    #[error(transparent)]
    MailMessageError(#[from] lettre::error::Error),
    /// Invalid sender or recipient mailbox.
    #[error(transparent)]
    MailAddressError(#[from] lettre::address::AddressError),
    /// Filesystem error outside of the image pipeline.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// A blocking task panicked or was cancelled.
    #[error(transparent)]
    JoinError(#[from] tokio::task::JoinError),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - Missing or invalid authentication
/// - 403 Forbidden - Policy denial or unverified email address
/// - 404 Not Found - Missing listings, career pages, images
/// - 409 Conflict - Invalid listing status transition, duplicate application
/// - 422 Unprocessable Entity - Request validation failures
/// - 429 Too Many Requests - Throttled login attempts
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::PolicyError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ListingError(err) => err.into_response(),
            Self::CareerPageError(err) => err.into_response(),
            Self::ImageError(err) => err.into_response(),
            Self::MultipartError(err) => {
                tracing::debug!("Rejected multipart body: {}", err);

                err.into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the given status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client to
/// avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
