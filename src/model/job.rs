use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum JobStatusDto {
    Draft,
    Pending,
    Published,
    Expired,
    Closed,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum EmploymentTypeDto {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Temporary,
}

#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct JobTierDto {
    pub slug: String,
    pub name: String,
    pub price_cents: i32,
    pub duration_days: i32,
    pub featured: bool,
}

/// A publicly visible job listing
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct JobListingDto {
    pub id: i32,
    pub company_id: i32,
    pub company_name: String,
    pub company_logo_url: Option<String>,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub employment_type: EmploymentTypeDto,
    pub remote: bool,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub featured: bool,
    pub published_at: Option<NaiveDateTime>,
    pub expires_at: Option<NaiveDateTime>,
}

/// A job listing as seen by the company that owns it
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CompanyJobListingDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub employment_type: EmploymentTypeDto,
    pub remote: bool,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub status: JobStatusDto,
    pub published_at: Option<NaiveDateTime>,
    pub expires_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema, validator::Validate))]
pub struct JobListingPayload {
    #[cfg_attr(
        feature = "server",
        validate(
            length(max = 255, message = "The title field must not be greater than 255 characters."),
            custom(function = "crate::model::api::validate_required", message = "The title field is required.")
        )
    )]
    pub title: String,
    #[cfg_attr(
        feature = "server",
        validate(
            length(max = 20000, message = "The description field must not be greater than 20000 characters."),
            custom(function = "crate::model::api::validate_required", message = "The description field is required.")
        )
    )]
    pub description: String,
    #[cfg_attr(
        feature = "server",
        validate(length(max = 255, message = "The location field must not be greater than 255 characters."))
    )]
    pub location: Option<String>,
    pub employment_type: EmploymentTypeDto,
    #[serde(default)]
    pub remote: bool,
    #[cfg_attr(
        feature = "server",
        validate(range(min = 0, message = "The salary min field must be at least 0."))
    )]
    pub salary_min: Option<i32>,
    #[cfg_attr(
        feature = "server",
        validate(range(min = 0, message = "The salary max field must be at least 0."))
    )]
    pub salary_max: Option<i32>,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema, validator::Validate))]
pub struct PublishJobListingDto {
    /// Slug of the tier the listing is published under
    #[cfg_attr(
        feature = "server",
        validate(length(min = 1, message = "The tier field is required."))
    )]
    pub tier: String,
    /// Publish at a later time, the listing stays pending until then
    pub starts_at: Option<NaiveDateTime>,
}

/// Query string accepted by the public job board
#[derive(Clone, Serialize, Deserialize, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct JobSearchParams {
    pub search: Option<String>,
    pub location: Option<String>,
    pub remote: Option<bool>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}
