use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_create_company_table::Company;

static FK_CAREER_PAGE_COMPANY_ID: &str = "fk_career_page_company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CareerPage::Table)
                    .if_not_exists()
                    .col(pk_auto(CareerPage::Id))
                    .col(integer_uniq(CareerPage::CompanyId))
                    .col(string_uniq(CareerPage::Slug))
                    .col(string_null(CareerPage::CustomDomain).unique_key())
                    .col(string(CareerPage::Headline))
                    .col(text_null(CareerPage::About))
                    .col(timestamp(CareerPage::CreatedAt))
                    .col(timestamp(CareerPage::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CAREER_PAGE_COMPANY_ID)
                    .from_tbl(CareerPage::Table)
                    .from_col(CareerPage::CompanyId)
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
                    .name(FK_CAREER_PAGE_COMPANY_ID)
                    .table(CareerPage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CareerPage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CareerPage {
    Table,
    Id,
    CompanyId,
    Slug,
    CustomDomain,
    Headline,
    About,
    CreatedAt,
    UpdatedAt,
}
