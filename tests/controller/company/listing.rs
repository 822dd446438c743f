use entity::sea_orm_active_enums::JobListingStatus;
use hireboard::{
    model::{
        applicant::ReceivedApplicationDto,
        job::{CompanyJobListingDto, EmploymentTypeDto, JobListingPayload, JobStatusDto, PublishJobListingDto},
    },
    server::{
        controller::company::listing::{
            close_listing, create_listing, get_listing, list_listing_applications, publish_listing,
        },
        model::auth::Guard,
    },
};

use super::*;

fn payload(title: &str) -> JobListingPayload {
    JobListingPayload {
        title: title.to_string(),
        description: "Ship the platform.".to_string(),
        location: Some("Berlin".to_string()),
        employment_type: EmploymentTypeDto::FullTime,
        remote: true,
        salary_min: Some(60000),
        salary_max: Some(80000),
    }
}

mod create_listing {
    use super::*;

    /// Expect 201 with a draft listing for a verified company
    #[tokio::test]
    async fn creates_draft() -> Result<(), TestError> {
        let test = TestBuilder::new().with_listing_tables().build().await?;
        let company = test.company().insert("jobs@acme.test").await?;
        log_in(&test, Guard::Company, company.id).await;

        let response = respond(
            create_listing(
                State(test.into_app_state()),
                test.session.clone(),
                CookieJar::new(),
                Json(payload("Rust Engineer")),
            )
            .await,
        );

        assert_eq!(response.status(), StatusCode::CREATED);
        let listing: CompanyJobListingDto = json_body(response).await;
        assert_eq!(listing.title, "Rust Engineer");
        assert_eq!(listing.status, JobStatusDto::Draft);

        Ok(())
    }

    /// Expect 403 while the company's email address is unverified
    #[tokio::test]
    async fn requires_verified_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_listing_tables().build().await?;
        let company = test.company().insert_unverified("jobs@acme.test").await?;
        log_in(&test, Guard::Company, company.id).await;

        let result = create_listing(
            State(test.into_app_state()),
            test.session.clone(),
            CookieJar::new(),
            Json(payload("Rust Engineer")),
        )
        .await;

        assert_eq!(status(result), StatusCode::FORBIDDEN);

        Ok(())
    }
}

mod get_listing {
    use super::*;

    /// Expect 403 for another company's listing
    #[tokio::test]
    async fn forbids_other_company() -> Result<(), TestError> {
        let test = TestBuilder::new().with_listing_tables().build().await?;
        let acme = test.company().insert("jobs@acme.test").await?;
        let globex = test.company().insert("jobs@globex.test").await?;
        let listing = test
            .listing()
            .insert(acme.id, JobListingStatus::Draft)
            .await?;
        log_in(&test, Guard::Company, globex.id).await;

        let result = get_listing(
            State(test.into_app_state()),
            test.session.clone(),
            CookieJar::new(),
            Path(listing.id),
        )
        .await;

        assert_eq!(status(result), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect 404 for a listing that does not exist
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_listing_tables().build().await?;
        let company = test.company().insert("jobs@acme.test").await?;
        log_in(&test, Guard::Company, company.id).await;

        let result = get_listing(
            State(test.into_app_state()),
            test.session.clone(),
            CookieJar::new(),
            Path(1),
        )
        .await;

        assert_eq!(status(result), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod publish_listing {
    use super::*;

    /// Expect a draft to be published under the chosen tier
    #[tokio::test]
    async fn publishes_draft() -> Result<(), TestError> {
        let test = TestBuilder::new().with_listing_tables().build().await?;
        let company = test.company().insert("jobs@acme.test").await?;
        let listing = test
            .listing()
            .insert(company.id, JobListingStatus::Draft)
            .await?;
        log_in(&test, Guard::Company, company.id).await;

        let response = respond(
            publish_listing(
                State(test.into_app_state()),
                test.session.clone(),
                CookieJar::new(),
                Path(listing.id),
                Json(PublishJobListingDto {
                    tier: "featured".to_string(),
                    starts_at: None,
                }),
            )
            .await,
        );

        assert_eq!(response.status(), StatusCode::OK);
        let published: CompanyJobListingDto = json_body(response).await;
        assert_eq!(published.status, JobStatusDto::Published);
        assert!(published.expires_at.is_some());

        Ok(())
    }

    /// Expect 409 when publishing a listing that is already published
    #[tokio::test]
    async fn rejects_published_listing() -> Result<(), TestError> {
        let test = TestBuilder::new().with_listing_tables().build().await?;
        let company = test.company().insert("jobs@acme.test").await?;
        let listing = test
            .listing()
            .insert(company.id, JobListingStatus::Published)
            .await?;
        log_in(&test, Guard::Company, company.id).await;

        let result = publish_listing(
            State(test.into_app_state()),
            test.session.clone(),
            CookieJar::new(),
            Path(listing.id),
            Json(PublishJobListingDto {
                tier: "basic".to_string(),
                starts_at: None,
            }),
        )
        .await;

        assert_eq!(status(result), StatusCode::CONFLICT);

        Ok(())
    }
}

mod close_listing {
    use super::*;

    /// Expect 409 when closing a draft
    #[tokio::test]
    async fn rejects_draft() -> Result<(), TestError> {
        let test = TestBuilder::new().with_listing_tables().build().await?;
        let company = test.company().insert("jobs@acme.test").await?;
        let listing = test
            .listing()
            .insert(company.id, JobListingStatus::Draft)
            .await?;
        log_in(&test, Guard::Company, company.id).await;

        let result = close_listing(
            State(test.into_app_state()),
            test.session.clone(),
            CookieJar::new(),
            Path(listing.id),
        )
        .await;

        assert_eq!(status(result), StatusCode::CONFLICT);

        Ok(())
    }
}

mod list_listing_applications {
    use hireboard::{model::applicant::ApplyDto, server::service::application::ApplicationService};

    use super::*;

    /// Expect the owner to see who applied
    #[tokio::test]
    async fn lists_received_applications() -> Result<(), TestError> {
        let test = TestBuilder::new().with_listing_tables().build().await?;
        let company = test.company().insert("jobs@acme.test").await?;
        let applicant = test.applicant().insert("ada@example.test").await?;
        let listing = test
            .listing()
            .insert(company.id, JobListingStatus::Published)
            .await?;
        ApplicationService::new(&test.db)
            .apply(applicant.id, listing.id, ApplyDto::default())
            .await
            .unwrap();
        log_in(&test, Guard::Company, company.id).await;

        let response = respond(
            list_listing_applications(
                State(test.into_app_state()),
                test.session.clone(),
                CookieJar::new(),
                Path(listing.id),
            )
            .await,
        );

        assert_eq!(response.status(), StatusCode::OK);
        let received: Vec<ReceivedApplicationDto> = json_body(response).await;
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].applicant_email, "ada@example.test");

        Ok(())
    }
}
