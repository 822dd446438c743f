use entity::sea_orm_active_enums::JobListingStatus;
use hireboard::{
    model::{
        api::PageDto,
        applicant::ApplyDto,
        job::{JobListingDto, JobSearchParams},
    },
    server::{
        controller::job::{apply, search_jobs, show_job},
        model::auth::Guard,
    },
};

use super::*;

fn cover_letter(text: &str) -> ApplyDto {
    ApplyDto {
        cover_letter: Some(text.to_string()),
    }
}

mod search_jobs {
    use super::*;

    /// Expect only published listings on the board
    #[tokio::test]
    async fn lists_published_listings() -> Result<(), TestError> {
        let test = TestBuilder::new().with_listing_tables().build().await?;
        let company = test.company().insert("jobs@acme.test").await?;
        let published = test
            .listing()
            .insert(company.id, JobListingStatus::Published)
            .await?;
        test.listing()
            .insert(company.id, JobListingStatus::Draft)
            .await?;

        let response = respond(
            search_jobs(
                State(test.into_app_state()),
                Query(JobSearchParams::default()),
            )
            .await,
        );

        assert_eq!(response.status(), StatusCode::OK);
        let page: PageDto<JobListingDto> = json_body(response).await;
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].id, published.id);

        Ok(())
    }
}

mod show_job {
    use super::*;

    /// Expect 404 for a closed listing
    #[tokio::test]
    async fn hides_closed_listing() -> Result<(), TestError> {
        let test = TestBuilder::new().with_listing_tables().build().await?;
        let company = test.company().insert("jobs@acme.test").await?;
        let closed = test
            .listing()
            .insert(company.id, JobListingStatus::Closed)
            .await?;

        let result = show_job(State(test.into_app_state()), Path(closed.id)).await;

        assert_eq!(status(result), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod apply {
    use super::*;

    /// Expect 201 on the first application and 409 on the second
    #[tokio::test]
    async fn applies_once() -> Result<(), TestError> {
        let test = TestBuilder::new().with_listing_tables().build().await?;
        let company = test.company().insert("jobs@acme.test").await?;
        let applicant = test.applicant().insert("ada@example.test").await?;
        let listing = test
            .listing()
            .insert(company.id, JobListingStatus::Published)
            .await?;
        log_in(&test, Guard::Applicant, applicant.id).await;
        let state = test.into_app_state();

        let first = apply(
            State(state.clone()),
            test.session.clone(),
            CookieJar::new(),
            Path(listing.id),
            Json(cover_letter("Hello")),
        )
        .await;
        let second = apply(
            State(state),
            test.session.clone(),
            CookieJar::new(),
            Path(listing.id),
            Json(cover_letter("Hello again")),
        )
        .await;

        assert_eq!(status(first), StatusCode::CREATED);
        assert_eq!(status(second), StatusCode::CONFLICT);

        Ok(())
    }

    /// Expect 403 for an applicant who has not verified their email address
    #[tokio::test]
    async fn requires_verified_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_listing_tables().build().await?;
        let company = test.company().insert("jobs@acme.test").await?;
        let applicant = test.applicant().insert_unverified("ada@example.test").await?;
        let listing = test
            .listing()
            .insert(company.id, JobListingStatus::Published)
            .await?;
        log_in(&test, Guard::Applicant, applicant.id).await;

        let result = apply(
            State(test.into_app_state()),
            test.session.clone(),
            CookieJar::new(),
            Path(listing.id),
            Json(ApplyDto::default()),
        )
        .await;

        assert_eq!(status(result), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect a company session not to be able to apply
    #[tokio::test]
    async fn requires_applicant() -> Result<(), TestError> {
        let test = TestBuilder::new().with_listing_tables().build().await?;
        let company = test.company().insert("jobs@acme.test").await?;
        let listing = test
            .listing()
            .insert(company.id, JobListingStatus::Published)
            .await?;
        log_in(&test, Guard::Company, company.id).await;

        let result = apply(
            State(test.into_app_state()),
            test.session.clone(),
            CookieJar::new(),
            Path(listing.id),
            Json(ApplyDto::default()),
        )
        .await;

        assert_eq!(status(result), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
