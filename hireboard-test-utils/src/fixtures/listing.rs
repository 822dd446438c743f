//! Job listing fixtures.
//!
//! Listings are inserted directly with their publication window already set, no subscription is
//! created. Published listings run for [`TEST_LISTING_DAYS`] from the moment they are inserted,
//! so a listing inserted later is also published later.

use chrono::{Duration, NaiveDateTime};
use entity::sea_orm_active_enums::{EmploymentType, JobListingStatus};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_LISTING_DAYS, error::TestError, fixtures::now, TestContext};

impl TestContext {
    pub fn listing<'a>(&'a self) -> ListingFixtures<'a> {
        ListingFixtures { test: self }
    }
}

pub struct ListingFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> ListingFixtures<'a> {
    /// Insert a listing in `status` with a window matching that status
    ///
    /// - draft: no window
    /// - pending: starts tomorrow
    /// - published, closed: started now, still running
    /// - expired: ended yesterday
    pub async fn insert(
        &self,
        company_id: i32,
        status: JobListingStatus,
    ) -> Result<entity::job_listing::Model, TestError> {
        let now = now();
        let window = Duration::days(TEST_LISTING_DAYS);

        let (published_at, expires_at) = match status {
            JobListingStatus::Draft => (None, None),
            JobListingStatus::Pending => {
                let starts_at = now + Duration::days(1);
                (Some(starts_at), Some(starts_at + window))
            }
            JobListingStatus::Published | JobListingStatus::Closed => {
                (Some(now), Some(now + window))
            }
            JobListingStatus::Expired => {
                let ended_at = now - Duration::days(1);
                (Some(ended_at - window), Some(ended_at))
            }
        };

        self.insert_listing(company_id, "Software Engineer", false, status, published_at, expires_at)
            .await
    }

    /// Insert a published listing with the given title and remote flag
    pub async fn insert_titled(
        &self,
        company_id: i32,
        title: &str,
        remote: bool,
    ) -> Result<entity::job_listing::Model, TestError> {
        let now = now();

        self.insert_listing(
            company_id,
            title,
            remote,
            JobListingStatus::Published,
            Some(now),
            Some(now + Duration::days(TEST_LISTING_DAYS)),
        )
        .await
    }

    /// Insert a listing still marked published whose window ends at `expires_at`
    pub async fn insert_published_until(
        &self,
        company_id: i32,
        expires_at: NaiveDateTime,
    ) -> Result<entity::job_listing::Model, TestError> {
        self.insert_listing(
            company_id,
            "Software Engineer",
            false,
            JobListingStatus::Published,
            Some(expires_at - Duration::days(TEST_LISTING_DAYS)),
            Some(expires_at),
        )
        .await
    }

    /// Insert a pending listing whose window starts at `starts_at`
    pub async fn insert_pending_from(
        &self,
        company_id: i32,
        starts_at: NaiveDateTime,
    ) -> Result<entity::job_listing::Model, TestError> {
        self.insert_listing(
            company_id,
            "Software Engineer",
            false,
            JobListingStatus::Pending,
            Some(starts_at),
            Some(starts_at + Duration::days(TEST_LISTING_DAYS)),
        )
        .await
    }

    async fn insert_listing(
        &self,
        company_id: i32,
        title: &str,
        remote: bool,
        status: JobListingStatus,
        published_at: Option<NaiveDateTime>,
        expires_at: Option<NaiveDateTime>,
    ) -> Result<entity::job_listing::Model, TestError> {
        let now = now();

        Ok(
            entity::prelude::JobListing::insert(entity::job_listing::ActiveModel {
                company_id: ActiveValue::Set(company_id),
                title: ActiveValue::Set(title.to_string()),
                description: ActiveValue::Set(format!("{title} wanted to join our team.")),
                location: ActiveValue::Set(Some("Berlin".to_string())),
                employment_type: ActiveValue::Set(EmploymentType::FullTime),
                remote: ActiveValue::Set(remote),
                salary_min: ActiveValue::Set(None),
                salary_max: ActiveValue::Set(None),
                status: ActiveValue::Set(status),
                published_at: ActiveValue::Set(published_at),
                expires_at: ActiveValue::Set(expires_at),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
