//! HTTP controller endpoints for the Hireboard web API.
//!
//! This module contains Axum handlers for both authentication guards, company profile and
//! branding, job listing management, career pages, the public job board, and applications.
//! Controllers resolve the guard's principal, authorize through policies, and hand validated
//! input to services. They use utoipa for OpenAPI documentation.

pub mod applicant;
pub mod career;
pub mod company;
pub mod job;
pub mod tier;
pub mod util;
