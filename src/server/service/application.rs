use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, SqlErr};
use validator::Validate;

use crate::{
    model::applicant::{ApplicationDto, ApplyDto, ReceivedApplicationDto},
    server::{
        data::{application::ApplicationRepository, job_listing::JobListingRepository},
        error::{listing::ListingError, validation::ValidationError, Error},
        model::db::JobListingModel,
        util::time::now,
    },
};

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    /// Creates a new instance of [`ApplicationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies to a publicly visible listing, at most once per applicant
    ///
    /// # Returns
    /// - `Ok(ApplicationDto)` - Application recorded
    /// - `Err(ListingError::NotFound)` - Listing missing or not publicly visible
    /// - `Err(ListingError::AlreadyApplied)` - Applicant already applied to this listing
    pub async fn apply(
        &self,
        applicant_id: i32,
        listing_id: i32,
        dto: ApplyDto,
    ) -> Result<ApplicationDto, Error> {
        dto.validate().map_err(ValidationError::from)?;

        let now = now();
        let application_repo = ApplicationRepository::new(self.db);

        let Some((listing, _)) = JobListingRepository::new(self.db)
            .find_public(listing_id, now)
            .await?
        else {
            return Err(ListingError::NotFound(listing_id).into());
        };

        let already_applied = ListingError::AlreadyApplied {
            applicant_id,
            listing_id,
        };

        if application_repo.exists(listing.id, applicant_id).await? {
            return Err(already_applied.into());
        }

        let cover_letter = dto
            .cover_letter
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let application = match application_repo
            .create(listing.id, applicant_id, cover_letter, now)
            .await
        {
            Ok(application) => application,
            // Lost a race against a concurrent request from the same applicant
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(already_applied.into());
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(applicant_id, listing_id, "Applied to job listing");

        Ok(ApplicationDto {
            id: application.id,
            job_listing_id: listing.id,
            job_title: listing.title,
            cover_letter: application.cover_letter,
            created_at: application.created_at,
        })
    }

    /// Applications sent by an applicant, newest first
    pub async fn for_applicant(&self, applicant_id: i32) -> Result<Vec<ApplicationDto>, Error> {
        let applications = ApplicationRepository::new(self.db)
            .list_for_applicant(applicant_id)
            .await?;

        Ok(applications
            .into_iter()
            .filter_map(|(application, listing)| {
                let listing = listing?;

                Some(ApplicationDto {
                    id: application.id,
                    job_listing_id: listing.id,
                    job_title: listing.title,
                    cover_letter: application.cover_letter,
                    created_at: application.created_at,
                })
            })
            .collect())
    }

    /// Applications received for a listing, newest first
    pub async fn for_listing(
        &self,
        listing: &JobListingModel,
    ) -> Result<Vec<ReceivedApplicationDto>, Error> {
        let applications = ApplicationRepository::new(self.db)
            .list_for_listing(listing.id)
            .await?;

        Ok(applications
            .into_iter()
            .filter_map(|(application, applicant)| {
                let applicant = applicant?;

                Some(ReceivedApplicationDto {
                    id: application.id,
                    applicant_id: applicant.id,
                    applicant_name: applicant.name,
                    applicant_email: applicant.email,
                    cover_letter: application.cover_letter,
                    created_at: application.created_at,
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use entity::sea_orm_active_enums::JobListingStatus;
    use hireboard_test_utils::prelude::*;

    use crate::{
        model::applicant::ApplyDto,
        server::{
            error::{listing::ListingError, Error},
            service::application::ApplicationService,
        },
    };

    fn apply(cover_letter: &str) -> ApplyDto {
        ApplyDto {
            cover_letter: Some(cover_letter.to_string()),
        }
    }

    mod apply {
        use super::*;

        /// Expect the application to be recorded with its cover letter
        #[tokio::test]
        async fn applies_to_visible_listing() -> Result<(), TestError> {
            let test = TestBuilder::new().with_listing_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let applicant = test.applicant().insert("ada@example.test").await?;
            let listing = test
                .listing()
                .insert(company.id, JobListingStatus::Published)
                .await?;

            let application = ApplicationService::new(&test.db)
                .apply(applicant.id, listing.id, apply(" Hello "))
                .await
                .unwrap();

            assert_eq!(application.job_listing_id, listing.id);
            assert_eq!(application.job_title, listing.title);
            assert_eq!(application.cover_letter.as_deref(), Some("Hello"));

            Ok(())
        }

        /// Expect the second application to the same listing to conflict
        #[tokio::test]
        async fn rejects_duplicate_application() -> Result<(), TestError> {
            let test = TestBuilder::new().with_listing_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let applicant = test.applicant().insert("ada@example.test").await?;
            let listing = test
                .listing()
                .insert(company.id, JobListingStatus::Published)
                .await?;
            let service = ApplicationService::new(&test.db);

            service
                .apply(applicant.id, listing.id, ApplyDto::default())
                .await
                .unwrap();
            let result = service
                .apply(applicant.id, listing.id, ApplyDto::default())
                .await;

            assert!(matches!(
                result,
                Err(Error::ListingError(ListingError::AlreadyApplied { .. }))
            ));

            Ok(())
        }

        /// Expect closed listings to reject applications as not found
        #[tokio::test]
        async fn rejects_closed_listing() -> Result<(), TestError> {
            let test = TestBuilder::new().with_listing_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let applicant = test.applicant().insert("ada@example.test").await?;
            let listing = test
                .listing()
                .insert(company.id, JobListingStatus::Closed)
                .await?;

            let result = ApplicationService::new(&test.db)
                .apply(applicant.id, listing.id, ApplyDto::default())
                .await;

            assert!(matches!(
                result,
                Err(Error::ListingError(ListingError::NotFound(_)))
            ));

            Ok(())
        }
    }

    mod for_listing {
        use super::*;

        /// Expect only the listing's applications with applicant details
        #[tokio::test]
        async fn lists_received_applications() -> Result<(), TestError> {
            let test = TestBuilder::new().with_listing_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let ada = test.applicant().insert("ada@example.test").await?;
            let grace = test.applicant().insert("grace@example.test").await?;
            let listing = test
                .listing()
                .insert(company.id, JobListingStatus::Published)
                .await?;
            let other = test
                .listing()
                .insert(company.id, JobListingStatus::Published)
                .await?;
            let service = ApplicationService::new(&test.db);
            service.apply(ada.id, listing.id, apply("Ada")).await.unwrap();
            service.apply(grace.id, other.id, apply("Grace")).await.unwrap();

            let received = service.for_listing(&listing).await.unwrap();

            assert_eq!(received.len(), 1);
            assert_eq!(received[0].applicant_email, "ada@example.test");

            let sent = service.for_applicant(grace.id).await.unwrap();
            assert_eq!(sent.len(), 1);
            assert_eq!(sent[0].job_listing_id, other.id);

            Ok(())
        }
    }
}
