use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(pk_auto(Company::Id))
                    .col(string(Company::Name))
                    .col(string_uniq(Company::Email))
                    .col(string(Company::PasswordHash))
                    .col(timestamp_null(Company::EmailVerifiedAt))
                    .col(string_null(Company::RememberToken))
                    .col(string_null(Company::Website))
                    .col(text_null(Company::Description))
                    .col(string_null(Company::LogoPath))
                    .col(string_null(Company::BannerPath))
                    .col(timestamp(Company::CreatedAt))
                    .col(timestamp(Company::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Company::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Company {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    EmailVerifiedAt,
    RememberToken,
    Website,
    Description,
    LogoPath,
    BannerPath,
    CreatedAt,
    UpdatedAt,
}
