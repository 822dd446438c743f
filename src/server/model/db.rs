//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used across services and controllers.

/// Company account, authenticated through the company guard.
pub type CompanyModel = entity::company::Model;

/// Applicant account, authenticated through the applicant guard.
pub type ApplicantModel = entity::applicant::Model;

pub type EmailVerificationModel = entity::email_verification::Model;

/// Publication tier (basic, featured, premium) seeded by migration.
pub type JobTierModel = entity::job_tier::Model;

/// Job listing owned by exactly one company.
pub type JobListingModel = entity::job_listing::Model;

/// Window during which a listing is published under a tier.
pub type JobListingSubscriptionModel = entity::job_listing_subscription::Model;

pub type JobApplicationModel = entity::job_application::Model;

pub type CareerPageModel = entity::career_page::Model;

pub type CareerPageImageModel = entity::career_page_image::Model;

pub type CareerPageVideoModel = entity::career_page_video::Model;
