use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use entity::sea_orm_active_enums::JobListingStatus;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("Job listing ID {0} not found")]
    NotFound(i32),
    #[error("Job listing ID {id} cannot move from {from:?} to {to:?}")]
    InvalidStatusTransition {
        id: i32,
        from: JobListingStatus,
        to: JobListingStatus,
    },
    #[error("Applicant ID {applicant_id} already applied to job listing ID {listing_id}")]
    AlreadyApplied { applicant_id: i32, listing_id: i32 },
}

impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Job listing not found."),
            Self::InvalidStatusTransition { from, to, .. } => error_response(
                StatusCode::CONFLICT,
                format!(
                    "A {} job listing cannot be {}.",
                    status_label(from),
                    status_label(to)
                ),
            ),
            Self::AlreadyApplied { .. } => {
                error_response(StatusCode::CONFLICT, "You have already applied to this job.")
            }
        }
    }
}

fn status_label(status: JobListingStatus) -> &'static str {
    match status {
        JobListingStatus::Draft => "draft",
        JobListingStatus::Pending => "pending",
        JobListingStatus::Published => "published",
        JobListingStatus::Expired => "expired",
        JobListingStatus::Closed => "closed",
    }
}
