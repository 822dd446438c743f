use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CompanyDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    pub website: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema, validator::Validate))]
pub struct RegisterDto {
    #[cfg_attr(
        feature = "server",
        validate(
            length(max = 255, message = "The name field must not be greater than 255 characters."),
            custom(function = "crate::model::api::validate_required", message = "The name field is required.")
        )
    )]
    pub name: String,
    #[cfg_attr(
        feature = "server",
        validate(email(message = "The email field must be a valid email address."))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "server",
        validate(length(min = 8, max = 255, message = "The password field must be between 8 and 255 characters."))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "server",
        validate(must_match(other = "password", message = "The password field confirmation does not match."))
    )]
    pub password_confirmation: String,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema, validator::Validate))]
pub struct LoginDto {
    #[cfg_attr(
        feature = "server",
        validate(email(message = "The email field must be a valid email address."))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "server",
        validate(length(min = 1, message = "The password field is required."))
    )]
    pub password: String,
    #[serde(default)]
    pub remember: bool,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema, validator::Validate))]
pub struct UpdateCompanyProfileDto {
    #[cfg_attr(
        feature = "server",
        validate(
            length(max = 255, message = "The name field must not be greater than 255 characters."),
            custom(function = "crate::model::api::validate_required", message = "The name field is required.")
        )
    )]
    pub name: String,
    #[cfg_attr(
        feature = "server",
        validate(url(message = "The website field must be a valid URL."))
    )]
    pub website: Option<String>,
    #[cfg_attr(
        feature = "server",
        validate(length(max = 5000, message = "The description field must not be greater than 5000 characters."))
    )]
    pub description: Option<String>,
}

/// Public URL of a freshly stored branding image
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ImageDto {
    pub path: String,
    pub url: String,
}
