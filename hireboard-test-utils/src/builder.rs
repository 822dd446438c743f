//! Declarative test builder.
//!
//! Table groups build on each other: listing tables include the auth tables, career tables include
//! the listing tables. Requesting a group more than once creates its tables only once.

use sea_orm::{sea_query::TableCreateStatement, ActiveValue, EntityTrait, Schema};

use crate::{constant::TEST_TIERS, error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    include_auth_tables: bool,
    include_listing_tables: bool,
    include_career_tables: bool,
    // Created after the table groups
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            include_auth_tables: false,
            include_listing_tables: false,
            include_career_tables: false,
            tables: Vec::new(),
        }
    }

    /// Company, Applicant and EmailVerification
    pub fn with_auth_tables(mut self) -> Self {
        self.include_auth_tables = true;
        self
    }

    /// Auth tables plus JobTier (seeded), JobListing, JobListingSubscription and JobApplication
    pub fn with_listing_tables(mut self) -> Self {
        self.include_listing_tables = true;
        self.with_auth_tables()
    }

    /// Listing tables plus CareerPage, CareerPageImage and CareerPageVideo
    ///
    /// The public career page lists the company's published jobs, hence the listing tables.
    pub fn with_career_tables(mut self) -> Self {
        self.include_career_tables = true;
        self.with_listing_tables()
    }

    /// Add a custom entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Create the context, its tables, and seed data.
    pub async fn build(self) -> Result<TestContext, TestError> {
        use entity::prelude::*;

        let test = TestContext::new().await?;
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);

        let mut stmts = Vec::new();
        if self.include_auth_tables {
            stmts.push(schema.create_table_from_entity(Company));
            stmts.push(schema.create_table_from_entity(Applicant));
            stmts.push(schema.create_table_from_entity(EmailVerification));
        }
        if self.include_listing_tables {
            stmts.push(schema.create_table_from_entity(JobTier));
            stmts.push(schema.create_table_from_entity(JobListing));
            stmts.push(schema.create_table_from_entity(JobListingSubscription));
            stmts.push(schema.create_table_from_entity(JobApplication));
        }
        if self.include_career_tables {
            stmts.push(schema.create_table_from_entity(CareerPage));
            stmts.push(schema.create_table_from_entity(CareerPageImage));
            stmts.push(schema.create_table_from_entity(CareerPageVideo));
        }
        stmts.extend(self.tables);

        test.with_tables(stmts).await?;

        if self.include_listing_tables {
            seed_tiers(&test).await?;
        }

        Ok(test)
    }
}

async fn seed_tiers(test: &TestContext) -> Result<(), TestError> {
    let tiers = TEST_TIERS.iter().map(|(slug, name, price_cents, duration_days, featured)| {
        entity::job_tier::ActiveModel {
            slug: ActiveValue::Set(slug.to_string()),
            name: ActiveValue::Set(name.to_string()),
            price_cents: ActiveValue::Set(*price_cents),
            duration_days: ActiveValue::Set(*duration_days),
            featured: ActiveValue::Set(*featured),
            ..Default::default()
        }
    });

    entity::prelude::JobTier::insert_many(tiers)
        .exec(&test.db)
        .await?;

    Ok(())
}
