use hireboard::{model::job::JobTierDto, server::controller::tier::list_tiers};

use super::*;

/// Expect the seeded tiers, cheapest first
#[tokio::test]
async fn lists_tiers() -> Result<(), TestError> {
    let test = TestBuilder::new().with_listing_tables().build().await?;

    let response = respond(list_tiers(State(test.into_app_state())).await);

    assert_eq!(response.status(), StatusCode::OK);
    let tiers: Vec<JobTierDto> = json_body(response).await;
    let slugs: Vec<&str> = tiers.iter().map(|t| t.slug.as_str()).collect();
    assert_eq!(slugs, vec!["basic", "featured", "premium"]);

    Ok(())
}
