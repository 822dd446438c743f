use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};

use crate::{error::TestError, TestContext};

impl TestContext {
    /// Seeded tier by slug, requires the listing tables
    pub async fn tier(&self, slug: &str) -> Result<entity::job_tier::Model, TestError> {
        entity::prelude::JobTier::find()
            .filter(entity::job_tier::Column::Slug.eq(slug))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("job tier {slug}")).into())
    }
}
