//! Company-facing endpoints under `/api/company`.

pub mod auth;
pub mod branding;
pub mod career_page;
pub mod listing;
pub mod profile;

pub static COMPANY_TAG: &str = "company";
