use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect, RelationTrait,
};

use crate::server::model::db::JobListingSubscriptionModel;

pub struct SubscriptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubscriptionRepository<'a, C> {
    /// Creates a new instance of [`SubscriptionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        job_listing_id: i32,
        job_tier_id: i32,
        starts_at: NaiveDateTime,
        ends_at: NaiveDateTime,
        now: NaiveDateTime,
    ) -> Result<JobListingSubscriptionModel, DbErr> {
        entity::job_listing_subscription::ActiveModel {
            job_listing_id: ActiveValue::Set(job_listing_id),
            job_tier_id: ActiveValue::Set(job_tier_id),
            starts_at: ActiveValue::Set(starts_at),
            ends_at: ActiveValue::Set(ends_at),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// IDs of listings with a featured-tier subscription running at `now`
    pub async fn featured_listing_ids(&self, now: NaiveDateTime) -> Result<Vec<i32>, DbErr> {
        entity::prelude::JobListingSubscription::find()
            .select_only()
            .column(entity::job_listing_subscription::Column::JobListingId)
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::job_listing_subscription::Relation::JobTier.def(),
            )
            .filter(entity::job_tier::Column::Featured.eq(true))
            .filter(entity::job_listing_subscription::Column::StartsAt.lte(now))
            .filter(entity::job_listing_subscription::Column::EndsAt.gt(now))
            .distinct()
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
