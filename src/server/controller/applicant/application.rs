use axum::{extract::State, response::IntoResponse, Json};
use axum_extra::extract::CookieJar;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, applicant::ApplicationDto},
    server::{
        controller::{applicant::APPLICANT_TAG, util::get_principal::require_principal},
        error::Error,
        model::{app::AppState, auth::Guard},
        service::application::ApplicationService,
    },
};

/// List the applications sent by the authenticated applicant
#[utoipa::path(
    get,
    path = "/api/applicant/applications",
    tag = APPLICANT_TAG,
    responses(
        (status = 200, description = "Applications, newest first", body = Vec<ApplicationDto>),
        (status = 401, description = "No applicant is logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_applications(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    let applicant = require_principal(&state, &session, &jar, Guard::Applicant).await?;

    let applications = ApplicationService::new(&state.db)
        .for_applicant(applicant.id)
        .await?;

    Ok(Json(applications))
}
