use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, job::JobTierDto},
    server::{error::Error, model::app::AppState, service::tier::TierService},
};

pub static TIER_TAG: &str = "tiers";

/// List the tiers a listing can be published under
#[utoipa::path(
    get,
    path = "/api/job-tiers",
    tag = TIER_TAG,
    responses(
        (status = 200, description = "Tiers, cheapest first", body = Vec<JobTierDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tiers(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let tiers = TierService::new(&state.db).list().await?;

    Ok(Json(tiers))
}
