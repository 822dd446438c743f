//! Cron jobs for job listing maintenance.
//!
//! Public queries already hide listings outside their publication window. The hourly sweep makes
//! the stored status catch up: pending listings whose start time arrived become published, and
//! published listings past `expires_at` become expired.

use std::{future::Future, sync::Arc};

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::error::Error;

pub mod config;
pub mod listing_lifecycle;

use self::listing_lifecycle::run_listing_lifecycle;

/// Owns the cron scheduler and the connection handed to every job run
pub struct Scheduler {
    db: DatabaseConnection,
    jobs: JobScheduler,
}

impl Scheduler {
    pub async fn new(db: DatabaseConnection) -> Result<Self, Error> {
        Ok(Self {
            db,
            jobs: JobScheduler::new().await?,
        })
    }

    /// Registers the listing lifecycle sweep and starts ticking.
    ///
    /// The scheduler keeps running on its own task after this returns.
    pub async fn start(self) -> Result<(), Error> {
        self.add_cron_job(
            "listing lifecycle",
            config::listing_lifecycle::CRON_EXPRESSION,
            run_listing_lifecycle,
        )
        .await?;

        self.jobs.start().await?;

        tracing::info!("Scheduler started");

        Ok(())
    }

    /// Runs `run` on every tick of `cron` with a clone of the database connection.
    ///
    /// A failed run is logged and the next tick runs as usual.
    async fn add_cron_job<F, Fut>(&self, name: &'static str, cron: &str, run: F) -> Result<(), Error>
    where
        F: Fn(DatabaseConnection) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<u64, Error>> + Send + 'static,
    {
        let db = self.db.clone();
        let run = Arc::new(run);

        let job = Job::new_async(cron, move |_, _| {
            let db = db.clone();
            let run = Arc::clone(&run);

            Box::pin(async move {
                if let Err(e) = run(db).await {
                    tracing::error!("Scheduled {} job failed: {:?}", name, e);
                }
            })
        })?;

        self.jobs.add(job).await?;

        tracing::debug!("Registered {} job ({})", name, cron);

        Ok(())
    }
}
