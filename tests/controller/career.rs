use hireboard::{
    model::career::{PublicCareerPageDto, UpdateCareerPageDto},
    server::{
        controller::{
            career::show_career_page,
            company::career_page::{get_career_page, update_career_page},
        },
        model::auth::Guard,
    },
};

use super::*;

/// Expect 404 for a slug nobody uses
#[tokio::test]
async fn returns_not_found_for_unknown_slug() -> Result<(), TestError> {
    let test = TestBuilder::new().with_career_tables().build().await?;

    let result = show_career_page(
        State(test.into_app_state()),
        Path("nobody".to_string()),
    )
    .await;

    assert_eq!(status(result), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 before the company has set up its page
#[tokio::test]
async fn company_page_requires_setup() -> Result<(), TestError> {
    let test = TestBuilder::new().with_career_tables().build().await?;
    let company = test.company().insert("jobs@acme.test").await?;
    log_in(&test, Guard::Company, company.id).await;

    let result = get_career_page(
        State(test.into_app_state()),
        test.session.clone(),
        CookieJar::new(),
    )
    .await;

    assert_eq!(status(result), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a saved page to be served publicly by its slug
#[tokio::test]
async fn serves_saved_page_by_slug() -> Result<(), TestError> {
    let test = TestBuilder::new().with_career_tables().build().await?;
    let company = test.company().insert("jobs@acme.test").await?;
    log_in(&test, Guard::Company, company.id).await;
    let state = test.into_app_state();

    let result = update_career_page(
        State(state.clone()),
        test.session.clone(),
        CookieJar::new(),
        Json(UpdateCareerPageDto {
            slug: "acme".to_string(),
            custom_domain: Some("Careers.Acme.test".to_string()),
            headline: "Build rockets with us".to_string(),
            about: None,
            videos: vec!["https://videos.test/intro".to_string()],
        }),
    )
    .await;
    assert_eq!(status(result), StatusCode::OK);

    let response = respond(show_career_page(State(state), Path("acme".to_string())).await);

    assert_eq!(response.status(), StatusCode::OK);
    let public: PublicCareerPageDto = json_body(response).await;
    assert_eq!(public.company_name, company.name);
    assert_eq!(public.page.custom_domain.as_deref(), Some("careers.acme.test"));
    assert_eq!(public.page.videos, vec!["https://videos.test/intro".to_string()]);

    Ok(())
}
