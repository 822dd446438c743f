//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications. Swagger UI serves the
//! generated document at `/api/docs`, and the public disk is served read-only at `/storage`.

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller, model::app::AppState, service::image::MAX_UPLOAD_BYTES, storage::Storage,
};

/// Room for multipart boundaries and headers around the largest accepted image
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together so utoipa documents every method of the path.
/// The request body limit is raised above axum's 2 MB default to fit image uploads, larger images
/// are rejected with a validation error by the upload reader.
///
/// # Returns
/// An Axum `Router<AppState>` ready to be merged into the main application router.
pub fn routes(storage: &Storage) -> Router<AppState> {
    use controller::{applicant, career, company, job, tier};

    #[derive(OpenApi)]
    #[openapi(info(title = "Hireboard", description = "Hireboard API"), tags(
        (name = company::COMPANY_TAG, description = "Company accounts, branding, career page and job listings"),
        (name = applicant::APPLICANT_TAG, description = "Applicant accounts and sent applications"),
        (name = job::JOB_TAG, description = "Public job board and applying"),
        (name = career::CAREER_TAG, description = "Public career pages"),
        (name = tier::TIER_TAG, description = "Publication tiers"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Company
        .routes(routes!(company::auth::register))
        .routes(routes!(company::auth::login))
        .routes(routes!(company::auth::logout))
        .routes(routes!(company::auth::me))
        .routes(routes!(company::auth::verify_email))
        .routes(routes!(company::auth::resend_verification))
        .routes(routes!(company::profile::update_profile))
        .routes(routes!(
            company::branding::upload_logo,
            company::branding::delete_logo
        ))
        .routes(routes!(
            company::branding::upload_banner,
            company::branding::delete_banner
        ))
        .routes(routes!(
            company::career_page::get_career_page,
            company::career_page::update_career_page
        ))
        .routes(routes!(company::career_page::add_career_page_image))
        .routes(routes!(company::career_page::delete_career_page_image))
        .routes(routes!(
            company::listing::list_listings,
            company::listing::create_listing
        ))
        .routes(routes!(
            company::listing::get_listing,
            company::listing::update_listing,
            company::listing::delete_listing
        ))
        .routes(routes!(company::listing::publish_listing))
        .routes(routes!(company::listing::close_listing))
        .routes(routes!(company::listing::list_listing_applications))
        // Applicant
        .routes(routes!(applicant::auth::register))
        .routes(routes!(applicant::auth::login))
        .routes(routes!(applicant::auth::logout))
        .routes(routes!(applicant::auth::me))
        .routes(routes!(applicant::auth::verify_email))
        .routes(routes!(applicant::auth::resend_verification))
        .routes(routes!(applicant::application::list_applications))
        // Public
        .routes(routes!(job::search_jobs))
        .routes(routes!(job::show_job))
        .routes(routes!(job::apply))
        .routes(routes!(career::show_career_page))
        .routes(routes!(tier::list_tiers))
        .split_for_parts();

    routes
        .layer(DefaultBodyLimit::max(
            MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES,
        ))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .nest_service("/storage", ServeDir::new(storage.root()))
        .layer(TraceLayer::new_for_http())
}
