use sea_orm::DatabaseConnection;

use crate::{
    model::job::JobTierDto,
    server::{data::job_tier::JobTierRepository, error::Error},
};

pub struct TierService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TierService<'a> {
    /// Creates a new instance of [`TierService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All tiers, cheapest first
    pub async fn list(&self) -> Result<Vec<JobTierDto>, Error> {
        let tiers = JobTierRepository::new(self.db).all().await?;

        Ok(tiers.into_iter().map(JobTierDto::from).collect())
    }
}
