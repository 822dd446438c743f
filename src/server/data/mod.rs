//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per table and are generic over `ConnectionTrait`, so the same
//! repository runs against the pool or inside a transaction.

pub mod application;
pub mod career_page;
pub mod company;
pub mod email_verification;
pub mod job_listing;
pub mod job_tier;
pub mod principal;
pub mod subscription;
