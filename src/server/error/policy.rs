use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Company ID {company_id} may not {ability} job listing ID {listing_id}")]
    JobListingDenied {
        company_id: i32,
        listing_id: i32,
        ability: &'static str,
    },
}

impl IntoResponse for PolicyError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(StatusCode::FORBIDDEN, "This action is unauthorized.")
    }
}
