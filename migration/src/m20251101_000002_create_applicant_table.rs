use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Applicant::Table)
                    .if_not_exists()
                    .col(pk_auto(Applicant::Id))
                    .col(string(Applicant::Name))
                    .col(string_uniq(Applicant::Email))
                    .col(string(Applicant::PasswordHash))
                    .col(timestamp_null(Applicant::EmailVerifiedAt))
                    .col(string_null(Applicant::RememberToken))
                    .col(timestamp(Applicant::CreatedAt))
                    .col(timestamp(Applicant::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Applicant::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Applicant {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    EmailVerifiedAt,
    RememberToken,
    CreatedAt,
    UpdatedAt,
}
