use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::CookieJar;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        career::{CareerPageDto, CareerPageImageDto, UpdateCareerPageDto},
    },
    server::{
        controller::{
            company::COMPANY_TAG,
            util::{get_principal::require_principal, multipart::read_image},
        },
        error::Error,
        model::{app::AppState, auth::Guard},
        service::career_page::CareerPageService,
    },
};

/// Get the company's career page
#[utoipa::path(
    get,
    path = "/api/company/career-page",
    tag = COMPANY_TAG,
    responses(
        (status = 200, description = "Career page with images and videos", body = CareerPageDto),
        (status = 401, description = "No company is logged in", body = ErrorDto),
        (status = 404, description = "Career page has not been set up", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_career_page(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    let company = require_principal(&state, &session, &jar, Guard::Company).await?;

    let page = CareerPageService::new(&state.db, &state.storage)
        .get(company.id)
        .await?;

    Ok(Json(page))
}

/// Create or update the company's career page
///
/// Videos are replaced in the order given.
#[utoipa::path(
    put,
    path = "/api/company/career-page",
    tag = COMPANY_TAG,
    request_body = UpdateCareerPageDto,
    responses(
        (status = 200, description = "Career page saved", body = CareerPageDto),
        (status = 401, description = "No company is logged in", body = ErrorDto),
        (status = 422, description = "Invalid fields, or slug or domain already taken", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_career_page(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    Json(dto): Json<UpdateCareerPageDto>,
) -> Result<impl IntoResponse, Error> {
    let company = require_principal(&state, &session, &jar, Guard::Company).await?;

    let page = CareerPageService::new(&state.db, &state.storage)
        .update(company.id, dto)
        .await?;

    Ok(Json(page))
}

/// Add an image to the company's career page
#[utoipa::path(
    post,
    path = "/api/company/career-page/images",
    tag = COMPANY_TAG,
    request_body(content_type = "multipart/form-data", description = "Image file in the `image` field"),
    responses(
        (status = 201, description = "Image appended to the page", body = CareerPageImageDto),
        (status = 401, description = "No company is logged in", body = ErrorDto),
        (status = 404, description = "Career page has not been set up", body = ErrorDto),
        (status = 422, description = "Missing, oversized, or unsupported image", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_career_page_image(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let company = require_principal(&state, &session, &jar, Guard::Company).await?;

    let bytes = read_image(&mut multipart, "image").await?;

    let image = CareerPageService::new(&state.db, &state.storage)
        .add_image(company.id, bytes)
        .await?;

    Ok((StatusCode::CREATED, Json(image)))
}

/// Delete an image from the company's career page
#[utoipa::path(
    delete,
    path = "/api/company/career-page/images/{id}",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Career page image ID")),
    responses(
        (status = 204, description = "Image and its files removed"),
        (status = 401, description = "No company is logged in", body = ErrorDto),
        (status = 404, description = "Image not found on this company's page", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_career_page_image(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    Path(image_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let company = require_principal(&state, &session, &jar, Guard::Company).await?;

    CareerPageService::new(&state.db, &state.storage)
        .delete_image(company.id, image_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
