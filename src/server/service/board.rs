//! Public job board.
//!
//! Only publicly visible listings are ever returned: `published` with an `expires_at` that is
//! unset or still in the future. Listings with a running featured-tier subscription are ranked
//! before the rest.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageDto,
        job::{JobListingDto, JobSearchParams},
    },
    server::{
        data::{
            job_listing::{JobListingRepository, ListingSearch},
            subscription::SubscriptionRepository,
        },
        error::{listing::ListingError, Error},
        model::db::{CompanyModel, JobListingModel},
        storage::Storage,
        util::time::now,
    },
};

pub const DEFAULT_PER_PAGE: u64 = 15;
pub const MAX_PER_PAGE: u64 = 50;
/// Highest page number served, keeps the row offset far from overflowing
pub const MAX_PAGE: u64 = u32::MAX as u64;

/// Builds the public representation of a listing
pub fn public_listing_dto(
    listing: JobListingModel,
    company: &CompanyModel,
    featured: bool,
    storage: &Storage,
) -> JobListingDto {
    JobListingDto {
        id: listing.id,
        company_id: company.id,
        company_name: company.name.clone(),
        company_logo_url: company.logo_path.as_deref().map(|path| storage.url(path)),
        title: listing.title,
        description: listing.description,
        location: listing.location,
        employment_type: listing.employment_type.into(),
        remote: listing.remote,
        salary_min: listing.salary_min,
        salary_max: listing.salary_max,
        featured,
        published_at: listing.published_at,
        expires_at: listing.expires_at,
    }
}

pub struct BoardService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a Storage,
}

impl<'a> BoardService<'a> {
    /// Creates a new instance of [`BoardService`]
    pub fn new(db: &'a DatabaseConnection, storage: &'a Storage) -> Self {
        Self { db, storage }
    }

    /// Searches publicly visible listings.
    ///
    /// `page` defaults to 1 and is clamped to [`MAX_PAGE`]. `per_page` defaults to 15, clamped
    /// to at most 50.
    pub async fn search(&self, params: JobSearchParams) -> Result<PageDto<JobListingDto>, Error> {
        let now = now();
        let page = params.page.unwrap_or(1).clamp(1, MAX_PAGE);
        let per_page = params
            .per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);

        let featured_ids = SubscriptionRepository::new(self.db)
            .featured_listing_ids(now)
            .await?;

        let search = ListingSearch {
            search: params.search,
            location: params.location,
            remote: params.remote,
        };

        let (listings, totals) = JobListingRepository::new(self.db)
            .public_page(&search, &featured_ids, page, per_page, now)
            .await?;

        let data = listings
            .into_iter()
            .filter_map(|(listing, company)| {
                let company = company?;
                let featured = featured_ids.contains(&listing.id);

                Some(public_listing_dto(listing, &company, featured, self.storage))
            })
            .collect();

        Ok(PageDto {
            data,
            page,
            per_page,
            total: totals.number_of_items,
            last_page: totals.number_of_pages.max(1),
        })
    }

    /// A single publicly visible listing
    ///
    /// # Returns
    /// - `Ok(JobListingDto)` - Listing is publicly visible
    /// - `Err(ListingError::NotFound)` - Listing missing or not publicly visible
    pub async fn show(&self, listing_id: i32) -> Result<JobListingDto, Error> {
        let now = now();

        let Some((listing, Some(company))) = JobListingRepository::new(self.db)
            .find_public(listing_id, now)
            .await?
        else {
            return Err(ListingError::NotFound(listing_id).into());
        };

        let featured = SubscriptionRepository::new(self.db)
            .featured_listing_ids(now)
            .await?
            .contains(&listing.id);

        Ok(public_listing_dto(listing, &company, featured, self.storage))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use entity::sea_orm_active_enums::JobListingStatus;
    use hireboard_test_utils::prelude::*;

    use crate::{
        model::job::JobSearchParams,
        server::{
            data::subscription::SubscriptionRepository,
            error::{listing::ListingError, Error},
            service::board::{BoardService, MAX_PAGE},
            storage::Storage,
            util::time::now,
        },
    };

    fn storage(test: &TestContext) -> Storage {
        Storage::new(test.storage_dir.path(), "http://localhost:8080")
    }

    mod search {
        use super::*;

        /// Expect featured listings first, then newest publication
        #[tokio::test]
        async fn ranks_featured_listings_first() -> Result<(), TestError> {
            let test = TestBuilder::new().with_listing_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let older = test
                .listing()
                .insert_titled(company.id, "Older featured", false)
                .await?;
            let newer = test
                .listing()
                .insert_titled(company.id, "Newer basic", false)
                .await?;
            let featured = test.tier("featured").await?;
            let now = now();
            SubscriptionRepository::new(&test.db)
                .create(
                    older.id,
                    featured.id,
                    now - Duration::hours(1),
                    now + Duration::days(30),
                    now,
                )
                .await?;
            let storage = storage(&test);

            let page = BoardService::new(&test.db, &storage)
                .search(JobSearchParams::default())
                .await
                .unwrap();

            let ids: Vec<i32> = page.data.iter().map(|l| l.id).collect();
            assert_eq!(ids, vec![older.id, newer.id]);
            assert!(page.data[0].featured);
            assert!(!page.data[1].featured);

            Ok(())
        }

        /// Expect the search term to match the title and the remote filter to apply
        #[tokio::test]
        async fn filters_by_search_and_remote() -> Result<(), TestError> {
            let test = TestBuilder::new().with_listing_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let rust = test
                .listing()
                .insert_titled(company.id, "Rust Engineer", true)
                .await?;
            test.listing()
                .insert_titled(company.id, "Rust Engineer On Site", false)
                .await?;
            test.listing()
                .insert_titled(company.id, "Designer", true)
                .await?;
            let storage = storage(&test);

            let page = BoardService::new(&test.db, &storage)
                .search(JobSearchParams {
                    search: Some("Rust".to_string()),
                    remote: Some(true),
                    ..Default::default()
                })
                .await
                .unwrap();

            assert_eq!(page.total, 1);
            assert_eq!(page.data[0].id, rust.id);

            Ok(())
        }

        /// Expect per_page to be clamped and pages to be counted
        #[tokio::test]
        async fn paginates() -> Result<(), TestError> {
            let test = TestBuilder::new().with_listing_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            for i in 0..3 {
                test.listing()
                    .insert_titled(company.id, &format!("Listing {}", i), false)
                    .await?;
            }
            let storage = storage(&test);
            let service = BoardService::new(&test.db, &storage);

            let page = service
                .search(JobSearchParams {
                    page: Some(2),
                    per_page: Some(2),
                    ..Default::default()
                })
                .await
                .unwrap();

            assert_eq!(page.data.len(), 1);
            assert_eq!(page.total, 3);
            assert_eq!(page.last_page, 2);

            let clamped = service
                .search(JobSearchParams {
                    per_page: Some(500),
                    ..Default::default()
                })
                .await
                .unwrap();
            assert_eq!(clamped.per_page, 50);

            Ok(())
        }

        /// Expect a huge page number to be clamped and answered with an empty page
        #[tokio::test]
        async fn clamps_huge_page_number() -> Result<(), TestError> {
            let test = TestBuilder::new().with_listing_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            test.listing()
                .insert(company.id, JobListingStatus::Published)
                .await?;
            let storage = storage(&test);

            let page = BoardService::new(&test.db, &storage)
                .search(JobSearchParams {
                    page: Some(u64::MAX),
                    ..Default::default()
                })
                .await
                .unwrap();

            assert_eq!(page.page, MAX_PAGE);
            assert!(page.data.is_empty());
            assert_eq!(page.total, 1);

            Ok(())
        }
    }

    mod show {
        use super::*;

        /// Expect a draft listing to be reported as missing
        #[tokio::test]
        async fn hides_draft_listing() -> Result<(), TestError> {
            let test = TestBuilder::new().with_listing_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let draft = test
                .listing()
                .insert(company.id, JobListingStatus::Draft)
                .await?;
            let storage = storage(&test);

            let result = BoardService::new(&test.db, &storage).show(draft.id).await;

            assert!(matches!(
                result,
                Err(Error::ListingError(ListingError::NotFound(_)))
            ));

            Ok(())
        }

        /// Expect a published listing past its expiry to be hidden before the sweep runs
        #[tokio::test]
        async fn hides_lapsed_listing() -> Result<(), TestError> {
            let test = TestBuilder::new().with_listing_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let lapsed = test
                .listing()
                .insert_published_until(company.id, now() - Duration::minutes(1))
                .await?;
            let storage = storage(&test);

            let result = BoardService::new(&test.db, &storage).show(lapsed.id).await;

            assert!(result.is_err());

            Ok(())
        }

        #[tokio::test]
        async fn shows_published_listing_with_company() -> Result<(), TestError> {
            let test = TestBuilder::new().with_listing_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let listing = test
                .listing()
                .insert(company.id, JobListingStatus::Published)
                .await?;
            let storage = storage(&test);

            let dto = BoardService::new(&test.db, &storage)
                .show(listing.id)
                .await
                .unwrap();

            assert_eq!(dto.company_id, company.id);
            assert_eq!(dto.company_name, company.name);
            assert!(dto.company_logo_url.is_none());

            Ok(())
        }
    }
}
