use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ApplicantDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema, validator::Validate))]
pub struct ApplyDto {
    #[cfg_attr(
        feature = "server",
        validate(length(max = 10000, message = "The cover letter must not be greater than 10000 characters."))
    )]
    pub cover_letter: Option<String>,
}

/// An application as seen by the applicant who sent it
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ApplicationDto {
    pub id: i32,
    pub job_listing_id: i32,
    pub job_title: String,
    pub cover_letter: Option<String>,
    pub created_at: NaiveDateTime,
}

/// An application as seen by the company owning the listing
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ReceivedApplicationDto {
    pub id: i32,
    pub applicant_id: i32,
    pub applicant_name: String,
    pub applicant_email: String,
    pub cover_letter: Option<String>,
    pub created_at: NaiveDateTime,
}
