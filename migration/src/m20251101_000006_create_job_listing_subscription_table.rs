use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000004_create_job_tier_table::JobTier,
    m20251101_000005_create_job_listing_table::JobListing,
};

static IDX_SUBSCRIPTION_JOB_LISTING_ID: &str = "idx_job_listing_subscription_job_listing_id";
static FK_SUBSCRIPTION_JOB_LISTING_ID: &str = "fk_job_listing_subscription_job_listing_id";
static FK_SUBSCRIPTION_JOB_TIER_ID: &str = "fk_job_listing_subscription_job_tier_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobListingSubscription::Table)
                    .if_not_exists()
                    .col(pk_auto(JobListingSubscription::Id))
                    .col(integer(JobListingSubscription::JobListingId))
                    .col(integer(JobListingSubscription::JobTierId))
                    .col(timestamp(JobListingSubscription::StartsAt))
                    .col(timestamp(JobListingSubscription::EndsAt))
                    .col(timestamp(JobListingSubscription::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SUBSCRIPTION_JOB_LISTING_ID)
                    .table(JobListingSubscription::Table)
                    .col(JobListingSubscription::JobListingId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUBSCRIPTION_JOB_LISTING_ID)
                    .from_tbl(JobListingSubscription::Table)
                    .from_col(JobListingSubscription::JobListingId)
                    .to_tbl(JobListing::Table)
                    .to_col(JobListing::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUBSCRIPTION_JOB_TIER_ID)
                    .from_tbl(JobListingSubscription::Table)
                    .from_col(JobListingSubscription::JobTierId)
                    .to_tbl(JobTier::Table)
                    .to_col(JobTier::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SUBSCRIPTION_JOB_TIER_ID)
                    .table(JobListingSubscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SUBSCRIPTION_JOB_LISTING_ID)
                    .table(JobListingSubscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SUBSCRIPTION_JOB_LISTING_ID)
                    .table(JobListingSubscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(JobListingSubscription::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum JobListingSubscription {
    Table,
    Id,
    JobListingId,
    JobTierId,
    StartsAt,
    EndsAt,
    CreatedAt,
}
