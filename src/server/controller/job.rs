//! Public job board.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::CookieJar;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PageDto, ValidationErrorDto},
        applicant::{ApplicationDto, ApplyDto},
        job::{JobListingDto, JobSearchParams},
    },
    server::{
        controller::util::get_principal::require_verified,
        error::Error,
        model::{app::AppState, auth::Guard},
        service::{application::ApplicationService, board::BoardService},
    },
};

pub static JOB_TAG: &str = "jobs";

/// Search published job listings
///
/// Featured listings come first, then the most recently published.
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = JOB_TAG,
    params(JobSearchParams),
    responses(
        (status = 200, description = "Page of published listings", body = PageDto<JobListingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobSearchParams>,
) -> Result<impl IntoResponse, Error> {
    let page = BoardService::new(&state.db, &state.storage)
        .search(params)
        .await?;

    Ok(Json(page))
}

/// Get a published job listing
#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    tag = JOB_TAG,
    params(("id" = i32, Path, description = "Job listing ID")),
    responses(
        (status = 200, description = "Published listing", body = JobListingDto),
        (status = 404, description = "Listing not found or not published", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn show_job(
    State(state): State<AppState>,
    Path(listing_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let listing = BoardService::new(&state.db, &state.storage)
        .show(listing_id)
        .await?;

    Ok(Json(listing))
}

/// Apply to a published job listing
#[utoipa::path(
    post,
    path = "/api/jobs/{id}/apply",
    tag = JOB_TAG,
    params(("id" = i32, Path, description = "Job listing ID")),
    request_body = ApplyDto,
    responses(
        (status = 201, description = "Application sent", body = ApplicationDto),
        (status = 401, description = "No applicant is logged in", body = ErrorDto),
        (status = 403, description = "Email address is not verified", body = ErrorDto),
        (status = 404, description = "Listing not found or not published", body = ErrorDto),
        (status = 409, description = "Already applied to this listing", body = ErrorDto),
        (status = 422, description = "Cover letter too long", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    Path(listing_id): Path<i32>,
    Json(dto): Json<ApplyDto>,
) -> Result<impl IntoResponse, Error> {
    let applicant = require_verified(&state, &session, &jar, Guard::Applicant).await?;

    let application = ApplicationService::new(&state.db)
        .apply(applicant.id, listing_id, dto)
        .await?;

    Ok((StatusCode::CREATED, Json(application)))
}
