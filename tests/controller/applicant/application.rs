use entity::sea_orm_active_enums::JobListingStatus;
use hireboard::{
    model::applicant::{ApplicationDto, ApplyDto},
    server::{
        controller::applicant::application::list_applications, model::auth::Guard,
        service::application::ApplicationService,
    },
};

use super::*;

/// Expect only the logged in applicant's applications
#[tokio::test]
async fn lists_own_applications() -> Result<(), TestError> {
    let test = TestBuilder::new().with_listing_tables().build().await?;
    let company = test.company().insert("jobs@acme.test").await?;
    let ada = test.applicant().insert("ada@example.test").await?;
    let grace = test.applicant().insert("grace@example.test").await?;
    let listing = test
        .listing()
        .insert(company.id, JobListingStatus::Published)
        .await?;
    let service = ApplicationService::new(&test.db);
    service
        .apply(ada.id, listing.id, ApplyDto::default())
        .await
        .unwrap();
    service
        .apply(grace.id, listing.id, ApplyDto::default())
        .await
        .unwrap();
    log_in(&test, Guard::Applicant, ada.id).await;

    let response = respond(
        list_applications(
            State(test.into_app_state()),
            test.session.clone(),
            CookieJar::new(),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    let applications: Vec<ApplicationDto> = json_body(response).await;
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].job_listing_id, listing.id);

    Ok(())
}
