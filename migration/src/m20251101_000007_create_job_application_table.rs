use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000002_create_applicant_table::Applicant,
    m20251101_000005_create_job_listing_table::JobListing,
};

static IDX_APPLICATION_LISTING_APPLICANT: &str = "idx_job_application_listing_applicant";
static FK_APPLICATION_JOB_LISTING_ID: &str = "fk_job_application_job_listing_id";
static FK_APPLICATION_APPLICANT_ID: &str = "fk_job_application_applicant_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(JobApplication::Id))
                    .col(integer(JobApplication::JobListingId))
                    .col(integer(JobApplication::ApplicantId))
                    .col(text_null(JobApplication::CoverLetter))
                    .col(timestamp(JobApplication::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // One application per applicant per listing
        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLICATION_LISTING_APPLICANT)
                    .table(JobApplication::Table)
                    .col(JobApplication::JobListingId)
                    .col(JobApplication::ApplicantId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLICATION_JOB_LISTING_ID)
                    .from_tbl(JobApplication::Table)
                    .from_col(JobApplication::JobListingId)
                    .to_tbl(JobListing::Table)
                    .to_col(JobListing::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLICATION_APPLICANT_ID)
                    .from_tbl(JobApplication::Table)
                    .from_col(JobApplication::ApplicantId)
                    .to_tbl(Applicant::Table)
                    .to_col(Applicant::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPLICATION_APPLICANT_ID)
                    .table(JobApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPLICATION_JOB_LISTING_ID)
                    .table(JobApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPLICATION_LISTING_APPLICANT)
                    .table(JobApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(JobApplication::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum JobApplication {
    Table,
    Id,
    JobListingId,
    ApplicantId,
    CoverLetter,
    CreatedAt,
}
