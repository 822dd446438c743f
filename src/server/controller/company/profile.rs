use axum::{extract::State, response::IntoResponse, Json};
use axum_extra::extract::CookieJar;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        company::{CompanyDto, UpdateCompanyProfileDto},
    },
    server::{
        controller::{company::COMPANY_TAG, util::get_principal::require_principal},
        error::Error,
        model::{app::AppState, auth::Guard},
        service::company::CompanyService,
    },
};

/// Update the company's public profile
#[utoipa::path(
    put,
    path = "/api/company/profile",
    tag = COMPANY_TAG,
    request_body = UpdateCompanyProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = CompanyDto),
        (status = 401, description = "No company is logged in", body = ErrorDto),
        (status = 422, description = "Invalid profile fields", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    Json(dto): Json<UpdateCompanyProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let company = require_principal(&state, &session, &jar, Guard::Company).await?;

    let profile = CompanyService::new(&state.db, &state.storage)
        .update_profile(company.id, dto)
        .await?;

    Ok(Json(profile))
}
