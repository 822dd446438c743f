use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::JobTierModel;

pub struct JobTierRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JobTierRepository<'a, C> {
    /// Creates a new instance of [`JobTierRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All tiers, cheapest first
    pub async fn all(&self) -> Result<Vec<JobTierModel>, DbErr> {
        entity::prelude::JobTier::find()
            .order_by_asc(entity::job_tier::Column::PriceCents)
            .order_by_asc(entity::job_tier::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<JobTierModel>, DbErr> {
        entity::prelude::JobTier::find()
            .filter(entity::job_tier::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }
}
