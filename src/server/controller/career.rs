use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, career::PublicCareerPageDto},
    server::{error::Error, model::app::AppState, service::career_page::CareerPageService},
};

pub static CAREER_TAG: &str = "careers";

/// Get a company's public career page by slug
#[utoipa::path(
    get,
    path = "/api/careers/{slug}",
    tag = CAREER_TAG,
    params(("slug" = String, Path, description = "Career page slug")),
    responses(
        (status = 200, description = "Career page with the company's published listings", body = PublicCareerPageDto),
        (status = 404, description = "No career page uses this slug", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn show_career_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let page = CareerPageService::new(&state.db, &state.storage)
        .public(&slug)
        .await?;

    Ok(Json(page))
}
