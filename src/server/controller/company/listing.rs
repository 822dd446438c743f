//! Job listing management for the owning company.
//!
//! Every route requires a verified company. Routes addressing a single listing load it first
//! and then authorize the ability through [`JobListingPolicy`], so another company's listing
//! answers 403 while a missing one answers 404.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::CookieJar;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        applicant::ReceivedApplicationDto,
        job::{CompanyJobListingDto, JobListingPayload, PublishJobListingDto},
    },
    server::{
        controller::{company::COMPANY_TAG, util::get_principal::require_verified},
        error::Error,
        model::{app::AppState, auth::Guard, db::JobListingModel},
        policy::job_listing::{JobListingAbility, JobListingPolicy},
        service::{application::ApplicationService, listing::ListingService},
    },
};

/// Resolves the verified company and the listing it wants to act on
async fn authorized_listing(
    state: &AppState,
    session: &Session,
    jar: &CookieJar,
    listing_id: i32,
    ability: JobListingAbility,
) -> Result<JobListingModel, Error> {
    let company = require_verified(state, session, jar, Guard::Company).await?;

    let listing = ListingService::new(&state.db).find(listing_id).await?;
    JobListingPolicy::authorize(company.id, &listing, ability)?;

    Ok(listing)
}

/// List the company's job listings, newest first
#[utoipa::path(
    get,
    path = "/api/company/job-listings",
    tag = COMPANY_TAG,
    responses(
        (status = 200, description = "Listings in every status", body = Vec<CompanyJobListingDto>),
        (status = 401, description = "No company is logged in", body = ErrorDto),
        (status = 403, description = "Email address is not verified", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_listings(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    let company = require_verified(&state, &session, &jar, Guard::Company).await?;

    let listings = ListingService::new(&state.db).list(company.id).await?;

    Ok(Json(listings))
}

/// Create a draft job listing
#[utoipa::path(
    post,
    path = "/api/company/job-listings",
    tag = COMPANY_TAG,
    request_body = JobListingPayload,
    responses(
        (status = 201, description = "Draft created", body = CompanyJobListingDto),
        (status = 401, description = "No company is logged in", body = ErrorDto),
        (status = 403, description = "Email address is not verified", body = ErrorDto),
        (status = 422, description = "Invalid listing fields", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_listing(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    Json(payload): Json<JobListingPayload>,
) -> Result<impl IntoResponse, Error> {
    let company = require_verified(&state, &session, &jar, Guard::Company).await?;

    let listing = ListingService::new(&state.db)
        .create(company.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(listing)))
}

/// Get one of the company's job listings
#[utoipa::path(
    get,
    path = "/api/company/job-listings/{id}",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Job listing ID")),
    responses(
        (status = 200, description = "Listing", body = CompanyJobListingDto),
        (status = 401, description = "No company is logged in", body = ErrorDto),
        (status = 403, description = "Not the owner, or email address is not verified", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_listing(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    Path(listing_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let listing =
        authorized_listing(&state, &session, &jar, listing_id, JobListingAbility::View).await?;

    Ok(Json(CompanyJobListingDto::from(listing)))
}

/// Update a job listing's fields
#[utoipa::path(
    put,
    path = "/api/company/job-listings/{id}",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Job listing ID")),
    request_body = JobListingPayload,
    responses(
        (status = 200, description = "Listing updated", body = CompanyJobListingDto),
        (status = 401, description = "No company is logged in", body = ErrorDto),
        (status = 403, description = "Not the owner, or email address is not verified", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 422, description = "Invalid listing fields", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_listing(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    Path(listing_id): Path<i32>,
    Json(payload): Json<JobListingPayload>,
) -> Result<impl IntoResponse, Error> {
    let listing =
        authorized_listing(&state, &session, &jar, listing_id, JobListingAbility::Update).await?;

    let listing = ListingService::new(&state.db)
        .update(listing, payload)
        .await?;

    Ok(Json(listing))
}

/// Delete a job listing with its subscriptions and applications
#[utoipa::path(
    delete,
    path = "/api/company/job-listings/{id}",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Job listing ID")),
    responses(
        (status = 204, description = "Listing deleted"),
        (status = 401, description = "No company is logged in", body = ErrorDto),
        (status = 403, description = "Not the owner, or email address is not verified", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_listing(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    Path(listing_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let listing =
        authorized_listing(&state, &session, &jar, listing_id, JobListingAbility::Delete).await?;

    ListingService::new(&state.db).delete(listing).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Publish a job listing under a tier
///
/// A `starts_at` in the future schedules the listing as `pending`.
#[utoipa::path(
    post,
    path = "/api/company/job-listings/{id}/publish",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Job listing ID")),
    request_body = PublishJobListingDto,
    responses(
        (status = 200, description = "Listing published or scheduled", body = CompanyJobListingDto),
        (status = 401, description = "No company is logged in", body = ErrorDto),
        (status = 403, description = "Not the owner, or email address is not verified", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 409, description = "Listing is already published or pending", body = ErrorDto),
        (status = 422, description = "Unknown tier", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn publish_listing(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    Path(listing_id): Path<i32>,
    Json(dto): Json<PublishJobListingDto>,
) -> Result<impl IntoResponse, Error> {
    let listing =
        authorized_listing(&state, &session, &jar, listing_id, JobListingAbility::Publish).await?;

    let listing = ListingService::new(&state.db).publish(listing, dto).await?;

    Ok(Json(listing))
}

/// Close a published or pending job listing
#[utoipa::path(
    post,
    path = "/api/company/job-listings/{id}/close",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Job listing ID")),
    responses(
        (status = 200, description = "Listing closed", body = CompanyJobListingDto),
        (status = 401, description = "No company is logged in", body = ErrorDto),
        (status = 403, description = "Not the owner, or email address is not verified", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 409, description = "Listing is not published or pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn close_listing(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    Path(listing_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let listing =
        authorized_listing(&state, &session, &jar, listing_id, JobListingAbility::Close).await?;

    let listing = ListingService::new(&state.db).close(listing).await?;

    Ok(Json(listing))
}

/// List applications received for a job listing
#[utoipa::path(
    get,
    path = "/api/company/job-listings/{id}/applications",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Job listing ID")),
    responses(
        (status = 200, description = "Applications, newest first", body = Vec<ReceivedApplicationDto>),
        (status = 401, description = "No company is logged in", body = ErrorDto),
        (status = 403, description = "Not the owner, or email address is not verified", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_listing_applications(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    Path(listing_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let listing = authorized_listing(
        &state,
        &session,
        &jar,
        listing_id,
        JobListingAbility::ViewApplications,
    )
    .await?;

    let applications = ApplicationService::new(&state.db)
        .for_listing(&listing)
        .await?;

    Ok(Json(applications))
}
