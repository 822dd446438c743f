use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// (slug, name, price_cents, duration_days, featured)
const DEFAULT_TIERS: [(&str, &str, i32, i32, bool); 3] = [
    ("basic", "Basic", 0, 30, false),
    ("featured", "Featured", 9900, 30, true),
    ("premium", "Premium", 24900, 60, true),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobTier::Table)
                    .if_not_exists()
                    .col(pk_auto(JobTier::Id))
                    .col(string_uniq(JobTier::Slug))
                    .col(string(JobTier::Name))
                    .col(integer(JobTier::PriceCents))
                    .col(integer(JobTier::DurationDays))
                    .col(boolean(JobTier::Featured))
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert()
            .into_table(JobTier::Table)
            .columns([
                JobTier::Slug,
                JobTier::Name,
                JobTier::PriceCents,
                JobTier::DurationDays,
                JobTier::Featured,
            ])
            .to_owned();

        for (slug, name, price_cents, duration_days, featured) in DEFAULT_TIERS {
            seed.values_panic([
                slug.into(),
                name.into(),
                price_cents.into(),
                duration_days.into(),
                featured.into(),
            ]);
        }

        manager.exec_stmt(seed).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobTier::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum JobTier {
    Table,
    Id,
    Slug,
    Name,
    PriceCents,
    DurationDays,
    Featured,
}
