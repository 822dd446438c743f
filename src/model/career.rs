use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::job::JobListingDto;

#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CareerPageImageDto {
    pub id: i32,
    pub url: String,
    pub position: i32,
}

#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CareerPageDto {
    pub slug: String,
    pub custom_domain: Option<String>,
    pub headline: String,
    pub about: Option<String>,
    pub images: Vec<CareerPageImageDto>,
    pub videos: Vec<String>,
    pub updated_at: NaiveDateTime,
}

/// A career page as rendered for the public
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PublicCareerPageDto {
    pub company_name: String,
    pub company_website: Option<String>,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub page: CareerPageDto,
    pub listings: Vec<JobListingDto>,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema, validator::Validate))]
pub struct UpdateCareerPageDto {
    #[cfg_attr(
        feature = "server",
        validate(custom(function = "crate::model::career::validate_slug"))
    )]
    pub slug: String,
    #[cfg_attr(
        feature = "server",
        validate(custom(function = "crate::model::career::validate_domain"))
    )]
    pub custom_domain: Option<String>,
    #[cfg_attr(
        feature = "server",
        validate(
            length(max = 255, message = "The headline field must not be greater than 255 characters."),
            custom(function = "crate::model::api::validate_required", message = "The headline field is required.")
        )
    )]
    pub headline: String,
    #[cfg_attr(
        feature = "server",
        validate(length(max = 10000, message = "The about field must not be greater than 10000 characters."))
    )]
    pub about: Option<String>,
    #[serde(default)]
    #[cfg_attr(
        feature = "server",
        validate(
            length(max = 10, message = "The videos field must not have more than 10 items."),
            custom(function = "crate::model::career::validate_video_urls")
        )
    )]
    pub videos: Vec<String>,
}

#[cfg(feature = "server")]
pub fn validate_slug(slug: &str) -> Result<(), validator::ValidationError> {
    let valid_chars = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if (3..=64).contains(&slug.len())
        && valid_chars
        && !slug.starts_with('-')
        && !slug.ends_with('-')
    {
        Ok(())
    } else {
        Err(validator::ValidationError::new("slug").with_message(
            "The slug may only contain lowercase letters, numbers, and dashes (3 to 64 characters)."
                .into(),
        ))
    }
}

#[cfg(feature = "server")]
pub fn validate_domain(domain: &str) -> Result<(), validator::ValidationError> {
    let valid_label = |label: &str| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
    };

    let labels: Vec<&str> = domain.split('.').collect();

    if domain.len() <= 253 && labels.len() >= 2 && labels.iter().all(|l| valid_label(l)) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("custom_domain")
            .with_message("The custom domain field must be a valid domain name.".into()))
    }
}

#[cfg(feature = "server")]
pub fn validate_video_urls(urls: &Vec<String>) -> Result<(), validator::ValidationError> {
    use validator::ValidateUrl;

    if urls.iter().all(|url| url.validate_url()) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("videos")
            .with_message("Every video must be a valid URL.".into()))
    }
}
