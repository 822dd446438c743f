//! Applicant-facing endpoints under `/api/applicant`.

pub mod application;
pub mod auth;

pub static APPLICANT_TAG: &str = "applicant";
