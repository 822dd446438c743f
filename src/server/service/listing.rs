//! Company-side job listing management.
//!
//! Ownership is checked by the caller through [`JobListingPolicy`](crate::server::policy::job_listing::JobListingPolicy)
//! before any of the mutating operations here are invoked.

use dioxus_logger::tracing;
use entity::sea_orm_active_enums::JobListingStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};
use validator::Validate;

use crate::{
    model::job::{CompanyJobListingDto, JobListingPayload, PublishJobListingDto},
    server::{
        data::{
            job_listing::{JobListingRepository, ListingFields},
            job_tier::JobTierRepository,
            subscription::SubscriptionRepository,
        },
        error::{listing::ListingError, validation::ValidationError, Error},
        model::db::JobListingModel,
        util::time::{now, publication_window, MAX_SCHEDULE_AHEAD_DAYS},
    },
};

/// Status changes a company may request directly.
///
/// Promotion of pending listings and expiry are done by the scheduler in bulk and are not part
/// of this table.
pub fn transition_allowed(from: JobListingStatus, to: JobListingStatus) -> bool {
    use JobListingStatus::*;

    matches!(
        (from, to),
        (Draft | Closed | Expired, Published | Pending) | (Published | Pending, Closed)
    )
}

/// Validates a listing payload and converts it into repository fields
pub fn listing_fields(payload: JobListingPayload) -> Result<ListingFields, ValidationError> {
    let payload = JobListingPayload {
        title: payload.title.trim().to_string(),
        description: payload.description.trim().to_string(),
        location: payload
            .location
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty()),
        ..payload
    };
    payload.validate()?;

    if let (Some(min), Some(max)) = (payload.salary_min, payload.salary_max) {
        if min > max {
            return Err(ValidationError::field(
                "salary_max",
                "The salary max field must be greater than or equal to salary min.",
            ));
        }
    }

    Ok(ListingFields {
        title: payload.title,
        description: payload.description,
        location: payload.location,
        employment_type: payload.employment_type.into(),
        remote: payload.remote,
        salary_min: payload.salary_min,
        salary_max: payload.salary_max,
    })
}

pub struct ListingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingService<'a> {
    /// Creates a new instance of [`ListingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a listing regardless of owner
    ///
    /// # Returns
    /// - `Ok(JobListingModel)` - Listing found
    /// - `Err(ListingError::NotFound)` - No listing with this ID
    pub async fn find(&self, listing_id: i32) -> Result<JobListingModel, Error> {
        JobListingRepository::new(self.db)
            .find_by_id(listing_id)
            .await?
            .ok_or_else(|| ListingError::NotFound(listing_id).into())
    }

    pub async fn list(&self, company_id: i32) -> Result<Vec<CompanyJobListingDto>, Error> {
        let listings = JobListingRepository::new(self.db)
            .list_for_company(company_id)
            .await?;

        Ok(listings.into_iter().map(CompanyJobListingDto::from).collect())
    }

    /// Creates a draft listing owned by `company_id`
    pub async fn create(
        &self,
        company_id: i32,
        payload: JobListingPayload,
    ) -> Result<CompanyJobListingDto, Error> {
        let fields = listing_fields(payload)?;

        let listing = JobListingRepository::new(self.db)
            .create(company_id, fields, now())
            .await?;

        tracing::info!(company_id, listing_id = listing.id, "Created job listing");

        Ok(listing.into())
    }

    pub async fn update(
        &self,
        listing: JobListingModel,
        payload: JobListingPayload,
    ) -> Result<CompanyJobListingDto, Error> {
        let fields = listing_fields(payload)?;

        let listing = JobListingRepository::new(self.db)
            .update_fields(listing, fields, now())
            .await?;

        Ok(listing.into())
    }

    pub async fn delete(&self, listing: JobListingModel) -> Result<(), Error> {
        JobListingRepository::new(self.db).delete(listing.id).await?;

        tracing::info!(
            company_id = listing.company_id,
            listing_id = listing.id,
            "Deleted job listing"
        );

        Ok(())
    }

    /// Publishes a listing under a tier.
    ///
    /// A subscription covering `[starts_at, starts_at + tier duration)` is created and the
    /// listing's publication window is set from it. A `starts_at` in the future leaves the listing
    /// `pending` until the scheduler promotes it.
    ///
    /// # Returns
    /// - `Ok(CompanyJobListingDto)` - Listing is now `published` or `pending`
    /// - `Err(ValidationError)` - Unknown tier slug, or `starts_at` too far ahead
    /// - `Err(ListingError::InvalidStatusTransition)` - Listing is already published or pending
    pub async fn publish(
        &self,
        listing: JobListingModel,
        dto: PublishJobListingDto,
    ) -> Result<CompanyJobListingDto, Error> {
        dto.validate().map_err(ValidationError::from)?;

        let tier = JobTierRepository::new(self.db)
            .find_by_slug(dto.tier.trim())
            .await?
            .ok_or_else(|| ValidationError::field("tier", "The selected tier is invalid."))?;

        let now = now();
        let (starts_at, ends_at) = publication_window(dto.starts_at, tier.duration_days, now)
            .ok_or_else(|| {
                ValidationError::field(
                    "starts_at",
                    format!(
                        "The starts at field must be a date within {} days.",
                        MAX_SCHEDULE_AHEAD_DAYS
                    ),
                )
            })?;
        let status = if starts_at > now {
            JobListingStatus::Pending
        } else {
            JobListingStatus::Published
        };

        if !transition_allowed(listing.status, status) {
            return Err(ListingError::InvalidStatusTransition {
                id: listing.id,
                from: listing.status,
                to: status,
            }
            .into());
        }

        let txn = self.db.begin().await?;

        SubscriptionRepository::new(&txn)
            .create(listing.id, tier.id, starts_at, ends_at, now)
            .await?;
        let listing = JobListingRepository::new(&txn)
            .set_status(listing, status, Some(starts_at), Some(ends_at), now)
            .await?;

        txn.commit().await?;

        tracing::info!(
            listing_id = listing.id,
            tier = %tier.slug,
            status = ?status,
            "Published job listing"
        );

        Ok(listing.into())
    }

    /// Closes a published or pending listing, keeping its publication window for reference
    pub async fn close(&self, listing: JobListingModel) -> Result<CompanyJobListingDto, Error> {
        if !transition_allowed(listing.status, JobListingStatus::Closed) {
            return Err(ListingError::InvalidStatusTransition {
                id: listing.id,
                from: listing.status,
                to: JobListingStatus::Closed,
            }
            .into());
        }

        let (published_at, expires_at) = (listing.published_at, listing.expires_at);
        let listing = JobListingRepository::new(self.db)
            .set_status(listing, JobListingStatus::Closed, published_at, expires_at, now())
            .await?;

        tracing::info!(listing_id = listing.id, "Closed job listing");

        Ok(listing.into())
    }
}
