//! Company logo and banner uploads.
//!
//! Uploads are `multipart/form-data` with the image in a `logo` or `banner` field. A new upload
//! replaces the previous image and deletes it together with its variations.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::CookieJar;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        company::ImageDto,
    },
    server::{
        controller::{
            company::COMPANY_TAG,
            util::{get_principal::require_principal, multipart::read_image},
        },
        data::company::BrandingSlot,
        error::Error,
        model::{app::AppState, auth::Guard},
        service::company::CompanyService,
    },
};

async fn upload(
    state: &AppState,
    session: &Session,
    jar: &CookieJar,
    mut multipart: Multipart,
    slot: BrandingSlot,
    field: &str,
) -> Result<ImageDto, Error> {
    let company = require_principal(state, session, jar, Guard::Company).await?;

    let bytes = read_image(&mut multipart, field).await?;

    CompanyService::new(&state.db, &state.storage)
        .replace_branding(company.id, slot, bytes)
        .await
}

async fn remove(
    state: &AppState,
    session: &Session,
    jar: &CookieJar,
    slot: BrandingSlot,
) -> Result<StatusCode, Error> {
    let company = require_principal(state, session, jar, Guard::Company).await?;

    CompanyService::new(&state.db, &state.storage)
        .remove_branding(company.id, slot)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Upload the company logo
///
/// The logo is cropped to 400x400 with a 96x96 variation and stored as PNG.
#[utoipa::path(
    post,
    path = "/api/company/logo",
    tag = COMPANY_TAG,
    request_body(content_type = "multipart/form-data", description = "Image file in the `logo` field"),
    responses(
        (status = 200, description = "Logo stored", body = ImageDto),
        (status = 401, description = "No company is logged in", body = ErrorDto),
        (status = 422, description = "Missing, oversized, or unsupported image", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_logo(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let image = upload(&state, &session, &jar, multipart, BrandingSlot::Logo, "logo").await?;

    Ok(Json(image))
}

/// Delete the company logo and its variations
#[utoipa::path(
    delete,
    path = "/api/company/logo",
    tag = COMPANY_TAG,
    responses(
        (status = 204, description = "Logo removed, or there was none"),
        (status = 401, description = "No company is logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_logo(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    remove(&state, &session, &jar, BrandingSlot::Logo).await
}

/// Upload the company banner
///
/// The banner is cropped to 1500x500 with a 600x200 variation and stored as JPEG.
#[utoipa::path(
    post,
    path = "/api/company/banner",
    tag = COMPANY_TAG,
    request_body(content_type = "multipart/form-data", description = "Image file in the `banner` field"),
    responses(
        (status = 200, description = "Banner stored", body = ImageDto),
        (status = 401, description = "No company is logged in", body = ErrorDto),
        (status = 422, description = "Missing, oversized, or unsupported image", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_banner(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let image = upload(&state, &session, &jar, multipart, BrandingSlot::Banner, "banner").await?;

    Ok(Json(image))
}

/// Delete the company banner and its variations
#[utoipa::path(
    delete,
    path = "/api/company/banner",
    tag = COMPANY_TAG,
    responses(
        (status = 204, description = "Banner removed, or there was none"),
        (status = 401, description = "No company is logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    remove(&state, &session, &jar, BrandingSlot::Banner).await
}
