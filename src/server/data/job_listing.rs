use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{EmploymentType, JobListingStatus};
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, ExprTrait, IntoActiveModel, ItemsAndPagesNumber, Order, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::{CompanyModel, JobListingModel};

/// Editable columns of a job listing
#[derive(Clone, Debug, PartialEq)]
pub struct ListingFields {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub employment_type: EmploymentType,
    pub remote: bool,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
}

/// Filters accepted by the public job board
#[derive(Clone, Debug, Default)]
pub struct ListingSearch {
    /// Matched against title and description
    pub search: Option<String>,
    pub location: Option<String>,
    pub remote: Option<bool>,
}

/// Case-insensitive substring match, `%` and `_` in `term` match literally
fn contains_ignore_case(column: entity::job_listing::Column, term: &str) -> Expr {
    let escaped = term
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    Func::lower(Expr::col(column.as_column_ref()))
        .like(LikeExpr::new(format!("%{escaped}%")).escape('\\'))
}

/// Published and not yet past `expires_at`
pub fn publicly_visible(now: NaiveDateTime) -> Condition {
    Condition::all()
        .add(entity::job_listing::Column::Status.eq(JobListingStatus::Published))
        .add(
            Condition::any()
                .add(entity::job_listing::Column::ExpiresAt.is_null())
                .add(entity::job_listing::Column::ExpiresAt.gt(now)),
        )
}

pub struct JobListingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JobListingRepository<'a, C> {
    /// Creates a new instance of [`JobListingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new draft listing for a company
    pub async fn create(
        &self,
        company_id: i32,
        fields: ListingFields,
        now: NaiveDateTime,
    ) -> Result<JobListingModel, DbErr> {
        entity::job_listing::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            title: ActiveValue::Set(fields.title),
            description: ActiveValue::Set(fields.description),
            location: ActiveValue::Set(fields.location),
            employment_type: ActiveValue::Set(fields.employment_type),
            remote: ActiveValue::Set(fields.remote),
            salary_min: ActiveValue::Set(fields.salary_min),
            salary_max: ActiveValue::Set(fields.salary_max),
            status: ActiveValue::Set(JobListingStatus::Draft),
            published_at: ActiveValue::Set(None),
            expires_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, listing_id: i32) -> Result<Option<JobListingModel>, DbErr> {
        entity::prelude::JobListing::find_by_id(listing_id)
            .one(self.db)
            .await
    }

    /// A company's listings, newest first
    pub async fn list_for_company(&self, company_id: i32) -> Result<Vec<JobListingModel>, DbErr> {
        entity::prelude::JobListing::find()
            .filter(entity::job_listing::Column::CompanyId.eq(company_id))
            .order_by_desc(entity::job_listing::Column::CreatedAt)
            .order_by_desc(entity::job_listing::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update_fields(
        &self,
        listing: JobListingModel,
        fields: ListingFields,
        now: NaiveDateTime,
    ) -> Result<JobListingModel, DbErr> {
        let mut listing_am = listing.into_active_model();
        listing_am.title = ActiveValue::Set(fields.title);
        listing_am.description = ActiveValue::Set(fields.description);
        listing_am.location = ActiveValue::Set(fields.location);
        listing_am.employment_type = ActiveValue::Set(fields.employment_type);
        listing_am.remote = ActiveValue::Set(fields.remote);
        listing_am.salary_min = ActiveValue::Set(fields.salary_min);
        listing_am.salary_max = ActiveValue::Set(fields.salary_max);
        listing_am.updated_at = ActiveValue::Set(now);

        listing_am.update(self.db).await
    }

    /// Moves a listing to `status` and replaces its publication window
    pub async fn set_status(
        &self,
        listing: JobListingModel,
        status: JobListingStatus,
        published_at: Option<NaiveDateTime>,
        expires_at: Option<NaiveDateTime>,
        now: NaiveDateTime,
    ) -> Result<JobListingModel, DbErr> {
        let mut listing_am = listing.into_active_model();
        listing_am.status = ActiveValue::Set(status);
        listing_am.published_at = ActiveValue::Set(published_at);
        listing_am.expires_at = ActiveValue::Set(expires_at);
        listing_am.updated_at = ActiveValue::Set(now);

        listing_am.update(self.db).await
    }

    /// Deletes a listing, its subscriptions and applications cascade
    ///
    /// Returns OK regardless of the listing existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, listing_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::JobListing::delete_by_id(listing_id)
            .exec(self.db)
            .await
    }

    /// One page of publicly visible listings with their company.
    ///
    /// Listings in `featured_ids` come first, then newest publication first.
    ///
    /// # Arguments
    /// - `search` - Filters from the query string
    /// - `featured_ids` - Listings with a running featured-tier subscription
    /// - `page` - 1-based page number
    /// - `per_page` - Page size
    /// - `now` - Reference time for expiry
    pub async fn public_page(
        &self,
        search: &ListingSearch,
        featured_ids: &[i32],
        page: u64,
        per_page: u64,
        now: NaiveDateTime,
    ) -> Result<(Vec<(JobListingModel, Option<CompanyModel>)>, ItemsAndPagesNumber), DbErr> {
        let mut condition = publicly_visible(now);

        if let Some(term) = search.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            condition = condition.add(
                Condition::any()
                    .add(contains_ignore_case(entity::job_listing::Column::Title, term))
                    .add(contains_ignore_case(
                        entity::job_listing::Column::Description,
                        term,
                    )),
            );
        }

        if let Some(location) = search
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
        {
            condition = condition.add(contains_ignore_case(
                entity::job_listing::Column::Location,
                location,
            ));
        }

        if let Some(remote) = search.remote {
            condition = condition.add(entity::job_listing::Column::Remote.eq(remote));
        }

        let mut query = entity::prelude::JobListing::find()
            .filter(condition)
            .find_also_related(entity::prelude::Company);

        if !featured_ids.is_empty() {
            query = query.order_by(
                entity::job_listing::Column::Id.is_in(featured_ids.iter().copied()),
                Order::Desc,
            );
        }

        let paginator = query
            .order_by_desc(entity::job_listing::Column::PublishedAt)
            .order_by_desc(entity::job_listing::Column::Id)
            .paginate(self.db, per_page);

        let totals = paginator.num_items_and_pages().await?;
        let listings = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((listings, totals))
    }

    /// A single publicly visible listing with its company
    pub async fn find_public(
        &self,
        listing_id: i32,
        now: NaiveDateTime,
    ) -> Result<Option<(JobListingModel, Option<CompanyModel>)>, DbErr> {
        entity::prelude::JobListing::find_by_id(listing_id)
            .filter(publicly_visible(now))
            .find_also_related(entity::prelude::Company)
            .one(self.db)
            .await
    }

    /// A company's publicly visible listings, newest publication first
    pub async fn public_for_company(
        &self,
        company_id: i32,
        now: NaiveDateTime,
    ) -> Result<Vec<JobListingModel>, DbErr> {
        entity::prelude::JobListing::find()
            .filter(entity::job_listing::Column::CompanyId.eq(company_id))
            .filter(publicly_visible(now))
            .order_by_desc(entity::job_listing::Column::PublishedAt)
            .order_by_desc(entity::job_listing::Column::Id)
            .all(self.db)
            .await
    }

    /// Publishes pending listings whose start time has been reached
    ///
    /// # Returns
    /// Number of listings published
    pub async fn publish_due(&self, now: NaiveDateTime) -> Result<u64, DbErr> {
        let result = entity::prelude::JobListing::update_many()
            .col_expr(
                entity::job_listing::Column::Status,
                Expr::value(JobListingStatus::Published),
            )
            .col_expr(entity::job_listing::Column::UpdatedAt, Expr::value(now))
            .filter(entity::job_listing::Column::Status.eq(JobListingStatus::Pending))
            .filter(entity::job_listing::Column::PublishedAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Expires published listings whose `expires_at` has passed
    ///
    /// # Returns
    /// Number of listings expired
    pub async fn expire_elapsed(&self, now: NaiveDateTime) -> Result<u64, DbErr> {
        let result = entity::prelude::JobListing::update_many()
            .col_expr(
                entity::job_listing::Column::Status,
                Expr::value(JobListingStatus::Expired),
            )
            .col_expr(entity::job_listing::Column::UpdatedAt, Expr::value(now))
            .filter(entity::job_listing::Column::Status.eq(JobListingStatus::Published))
            .filter(entity::job_listing::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {

    mod public_page {
        use chrono::Duration;
        use entity::sea_orm_active_enums::JobListingStatus;
        use hireboard_test_utils::prelude::*;

        use crate::server::{
            data::job_listing::{JobListingRepository, ListingSearch},
            util::time::now,
        };

        /// Expect drafts, closed and lapsed listings to be hidden
        #[tokio::test]
        async fn only_returns_visible_listings() -> Result<(), TestError> {
            let test = TestBuilder::new().with_listing_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let visible = test
                .listing()
                .insert(company.id, JobListingStatus::Published)
                .await?;
            test.listing()
                .insert(company.id, JobListingStatus::Draft)
                .await?;
            test.listing()
                .insert(company.id, JobListingStatus::Closed)
                .await?;
            test.listing()
                .insert_published_until(company.id, now() - Duration::minutes(1))
                .await?;

            let repo = JobListingRepository::new(&test.db);
            let (listings, totals) = repo
                .public_page(&ListingSearch::default(), &[], 1, 15, now())
                .await?;

            assert_eq!(totals.number_of_items, 1);
            assert_eq!(listings[0].0.id, visible.id);
            assert_eq!(listings[0].1.as_ref().map(|c| c.id), Some(company.id));

            Ok(())
        }

        /// Expect featured listings ahead of newer regular listings
        #[tokio::test]
        async fn orders_featured_first() -> Result<(), TestError> {
            let test = TestBuilder::new().with_listing_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let older = test
                .listing()
                .insert(company.id, JobListingStatus::Published)
                .await?;
            let newer = test
                .listing()
                .insert(company.id, JobListingStatus::Published)
                .await?;

            let repo = JobListingRepository::new(&test.db);
            let (listings, _) = repo
                .public_page(&ListingSearch::default(), &[older.id], 1, 15, now())
                .await?;
            let ids: Vec<i32> = listings.iter().map(|(l, _)| l.id).collect();

            assert_eq!(ids, vec![older.id, newer.id]);

            Ok(())
        }

        /// Expect search to match the title and the remote filter to apply
        #[tokio::test]
        async fn applies_filters() -> Result<(), TestError> {
            let test = TestBuilder::new().with_listing_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let rust = test
                .listing()
                .insert_titled(company.id, "Rust Engineer", true)
                .await?;
            test.listing()
                .insert_titled(company.id, "Rust Engineer (onsite)", false)
                .await?;
            test.listing()
                .insert_titled(company.id, "Designer", true)
                .await?;

            let search = ListingSearch {
                search: Some("Rust".to_string()),
                location: None,
                remote: Some(true),
            };
            let repo = JobListingRepository::new(&test.db);
            let (listings, _) = repo.public_page(&search, &[], 1, 15, now()).await?;
            let ids: Vec<i32> = listings.iter().map(|(l, _)| l.id).collect();

            assert_eq!(ids, vec![rust.id]);

            Ok(())
        }

        /// Expect matching to ignore case and to take `_` in the term literally
        #[tokio::test]
        async fn matches_ignoring_case_with_literal_wildcards() -> Result<(), TestError> {
            let test = TestBuilder::new().with_listing_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let underscored = test
                .listing()
                .insert_titled(company.id, "Growth_Hacker", false)
                .await?;
            test.listing()
                .insert_titled(company.id, "GrowthXHacker", false)
                .await?;

            let search = ListingSearch {
                search: Some("GROWTH_".to_string()),
                location: Some("berlin".to_string()),
                remote: None,
            };
            let repo = JobListingRepository::new(&test.db);
            let (listings, _) = repo.public_page(&search, &[], 1, 15, now()).await?;
            let ids: Vec<i32> = listings.iter().map(|(l, _)| l.id).collect();

            assert_eq!(ids, vec![underscored.id]);

            Ok(())
        }

        /// Expect the filter to lower both sides so PostgreSQL matches regardless of case
        #[test]
        fn builds_lowercased_escaped_like() {
            use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

            use crate::server::data::job_listing::contains_ignore_case;

            let sql = entity::prelude::JobListing::find()
                .filter(contains_ignore_case(
                    entity::job_listing::Column::Title,
                    "50% Rust",
                ))
                .build(DbBackend::Postgres)
                .to_string();

            assert!(sql.contains("LOWER("), "{sql}");
            assert!(sql.contains("% rust"), "{sql}");
            assert!(!sql.contains("50% rust"), "{sql}");
            assert!(sql.contains("ESCAPE"), "{sql}");
        }

        /// Expect pages to be sized by per_page
        #[tokio::test]
        async fn paginates_results() -> Result<(), TestError> {
            let test = TestBuilder::new().with_listing_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            for _ in 0..3 {
                test.listing()
                    .insert(company.id, JobListingStatus::Published)
                    .await?;
            }

            let repo = JobListingRepository::new(&test.db);
            let (listings, totals) = repo
                .public_page(&ListingSearch::default(), &[], 2, 2, now())
                .await?;

            assert_eq!(listings.len(), 1);
            assert_eq!(totals.number_of_items, 3);
            assert_eq!(totals.number_of_pages, 2);

            Ok(())
        }
    }

    mod lifecycle {
        use chrono::Duration;
        use entity::sea_orm_active_enums::JobListingStatus;
        use hireboard_test_utils::prelude::*;

        use crate::server::{data::job_listing::JobListingRepository, util::time::now};

        /// Expect due pending listings to be published and future ones left alone
        #[tokio::test]
        async fn publishes_due_pending_listings() -> Result<(), TestError> {
            let test = TestBuilder::new().with_listing_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let due = test
                .listing()
                .insert_pending_from(company.id, now() - Duration::minutes(5))
                .await?;
            let later = test
                .listing()
                .insert_pending_from(company.id, now() + Duration::days(1))
                .await?;

            let repo = JobListingRepository::new(&test.db);
            let published = repo.publish_due(now()).await?;

            assert_eq!(published, 1);
            assert_eq!(
                repo.find_by_id(due.id).await?.unwrap().status,
                JobListingStatus::Published
            );
            assert_eq!(
                repo.find_by_id(later.id).await?.unwrap().status,
                JobListingStatus::Pending
            );

            Ok(())
        }

        /// Expect lapsed published listings to expire
        #[tokio::test]
        async fn expires_elapsed_listings() -> Result<(), TestError> {
            let test = TestBuilder::new().with_listing_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let lapsed = test
                .listing()
                .insert_published_until(company.id, now() - Duration::minutes(5))
                .await?;
            let running = test
                .listing()
                .insert(company.id, JobListingStatus::Published)
                .await?;

            let repo = JobListingRepository::new(&test.db);
            let expired = repo.expire_elapsed(now()).await?;

            assert_eq!(expired, 1);
            assert_eq!(
                repo.find_by_id(lapsed.id).await?.unwrap().status,
                JobListingStatus::Expired
            );
            assert_eq!(
                repo.find_by_id(running.id).await?.unwrap().status,
                JobListingStatus::Published
            );

            Ok(())
        }
    }

    mod delete {
        use entity::sea_orm_active_enums::JobListingStatus;
        use hireboard_test_utils::prelude::*;

        use crate::server::data::job_listing::JobListingRepository;

        /// Expect no rows to be affected when deleting a listing that does not exist
        #[tokio::test]
        async fn affects_no_rows_for_missing_listing() -> Result<(), TestError> {
            let test = TestBuilder::new().with_listing_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let listing = test
                .listing()
                .insert(company.id, JobListingStatus::Draft)
                .await?;

            let result = JobListingRepository::new(&test.db)
                .delete(listing.id + 1)
                .await?;

            assert_eq!(result.rows_affected, 0);

            Ok(())
        }
    }
}
