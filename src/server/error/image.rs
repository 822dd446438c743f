use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{error::error_response, service::image::ImageKind};

/// Failures inside the image pipeline, logged where they occur and answered with a generic 500
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Failed to decode uploaded {kind:?} image: {source}")]
    Decode {
        kind: ImageKind,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to encode {kind:?} image: {source}")]
    Encode {
        kind: ImageKind,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to write {path} to the public disk: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Image processing task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ImageError {
    fn into_response(self) -> Response {
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
