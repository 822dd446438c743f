use chrono::NaiveDateTime;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{data::job_listing::JobListingRepository, error::Error, util::time::now};

/// Outcome of one lifecycle sweep
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleSweep {
    /// Pending listings whose start time was reached
    pub published: u64,
    /// Published listings whose `expires_at` passed
    pub expired: u64,
}

/// Promotes due pending listings, then expires lapsed published listings.
///
/// Promotion runs first so a pending listing whose whole window already elapsed (the scheduler
/// was down) ends up `expired` within a single sweep.
pub async fn sweep_listings(
    db: &DatabaseConnection,
    now: NaiveDateTime,
) -> Result<LifecycleSweep, DbErr> {
    let repo = JobListingRepository::new(db);

    let published = repo.publish_due(now).await?;
    let expired = repo.expire_elapsed(now).await?;

    Ok(LifecycleSweep { published, expired })
}

/// Cron entry point for the sweep
pub async fn run_listing_lifecycle(db: DatabaseConnection) -> Result<u64, Error> {
    let sweep = sweep_listings(&db, now()).await?;

    tracing::info!(
        "Listing lifecycle sweep published {} and expired {} job listing(s)",
        sweep.published,
        sweep.expired
    );

    Ok(sweep.published + sweep.expired)
}
