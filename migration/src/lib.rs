pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_company_table;
mod m20251101_000002_create_applicant_table;
mod m20251101_000003_create_email_verification_table;
mod m20251101_000004_create_job_tier_table;
mod m20251101_000005_create_job_listing_table;
mod m20251101_000006_create_job_listing_subscription_table;
mod m20251101_000007_create_job_application_table;
mod m20251101_000008_create_career_page_table;
mod m20251101_000009_create_career_page_media_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_company_table::Migration),
            Box::new(m20251101_000002_create_applicant_table::Migration),
            Box::new(m20251101_000003_create_email_verification_table::Migration),
            Box::new(m20251101_000004_create_job_tier_table::Migration),
            Box::new(m20251101_000005_create_job_listing_table::Migration),
            Box::new(m20251101_000006_create_job_listing_subscription_table::Migration),
            Box::new(m20251101_000007_create_job_application_table::Migration),
            Box::new(m20251101_000008_create_career_page_table::Migration),
            Box::new(m20251101_000009_create_career_page_media_tables::Migration),
        ]
    }
}
