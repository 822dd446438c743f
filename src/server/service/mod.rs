//! Service layer for business logic.
//!
//! Services enforce business rules on top of the repositories: guard authentication, email
//! verification, listing status transitions, applications, career pages, and the image pipeline.

pub mod application;
pub mod auth;
pub mod board;
pub mod career_page;
pub mod company;
pub mod image;
pub mod listing;
pub mod tier;
pub mod verification;
