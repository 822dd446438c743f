use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_create_company_table::Company;

static IDX_JOB_LISTING_COMPANY_ID: &str = "idx_job_listing_company_id";
static IDX_JOB_LISTING_STATUS: &str = "idx_job_listing_status";
static FK_JOB_LISTING_COMPANY_ID: &str = "fk_job_listing_company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobListing::Table)
                    .if_not_exists()
                    .col(pk_auto(JobListing::Id))
                    .col(integer(JobListing::CompanyId))
                    .col(string(JobListing::Title))
                    .col(text(JobListing::Description))
                    .col(string_null(JobListing::Location))
                    .col(string_len(JobListing::EmploymentType, 16))
                    .col(boolean(JobListing::Remote))
                    .col(integer_null(JobListing::SalaryMin))
                    .col(integer_null(JobListing::SalaryMax))
                    .col(string_len(JobListing::Status, 16))
                    .col(timestamp_null(JobListing::PublishedAt))
                    .col(timestamp_null(JobListing::ExpiresAt))
                    .col(timestamp(JobListing::CreatedAt))
                    .col(timestamp(JobListing::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOB_LISTING_COMPANY_ID)
                    .table(JobListing::Table)
                    .col(JobListing::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOB_LISTING_STATUS)
                    .table(JobListing::Table)
                    .col(JobListing::Status)
                    .col(JobListing::ExpiresAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_JOB_LISTING_COMPANY_ID)
                    .from_tbl(JobListing::Table)
                    .from_col(JobListing::CompanyId)
                    .to_tbl(Company::Table)
                    .to_col(Company::Id)
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
                    .name(FK_JOB_LISTING_COMPANY_ID)
                    .table(JobListing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JOB_LISTING_STATUS)
                    .table(JobListing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JOB_LISTING_COMPANY_ID)
                    .table(JobListing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(JobListing::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum JobListing {
    Table,
    Id,
    CompanyId,
    Title,
    Description,
    Location,
    EmploymentType,
    Remote,
    SalaryMin,
    SalaryMax,
    Status,
    PublishedAt,
    ExpiresAt,
    CreatedAt,
    UpdatedAt,
}
