use sea_orm_migration::{prelude::*, schema::*};

static IDX_EMAIL_VERIFICATION_PRINCIPAL: &str = "idx_email_verification_principal";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmailVerification::Table)
                    .if_not_exists()
                    .col(pk_auto(EmailVerification::Id))
                    .col(string_len(EmailVerification::Principal, 16))
                    .col(integer(EmailVerification::PrincipalId))
                    .col(string_uniq(EmailVerification::Token))
                    .col(timestamp(EmailVerification::ExpiresAt))
                    .col(timestamp(EmailVerification::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EMAIL_VERIFICATION_PRINCIPAL)
                    .table(EmailVerification::Table)
                    .col(EmailVerification::Principal)
                    .col(EmailVerification::PrincipalId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EMAIL_VERIFICATION_PRINCIPAL)
                    .table(EmailVerification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EmailVerification::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum EmailVerification {
    Table,
    Id,
    Principal,
    PrincipalId,
    Token,
    ExpiresAt,
    CreatedAt,
}
