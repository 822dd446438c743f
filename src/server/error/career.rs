use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum CareerPageError {
    #[error("No career page exists for slug {0:?}")]
    SlugNotFound(String),
    #[error("Company ID {0} has not set up a career page")]
    NotConfigured(i32),
    #[error("Career page image ID {0} not found")]
    ImageNotFound(i32),
}

impl IntoResponse for CareerPageError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::SlugNotFound(_) => error_response(StatusCode::NOT_FOUND, "Career page not found."),
            Self::NotConfigured(_) => error_response(
                StatusCode::NOT_FOUND,
                "Set up your career page first.",
            ),
            Self::ImageNotFound(_) => error_response(StatusCode::NOT_FOUND, "Image not found."),
        }
    }
}
