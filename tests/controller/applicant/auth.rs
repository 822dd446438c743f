use hireboard::{
    model::{applicant::ApplicantDto, company::RegisterDto},
    server::{
        controller::{
            applicant::auth::{logout, me, register, verify_email},
            company::auth::VerifyEmailParams,
        },
        model::{auth::Guard, session::principal::SessionPrincipalId},
    },
};

use super::*;

/// Token from the verification link in the last sent mail
fn sent_token(body: &str) -> String {
    let start = body.find("token=").unwrap() + "token=".len();

    body[start..].split_whitespace().next().unwrap().to_string()
}

/// Expect registration, email verification and `me` to work end to end
#[tokio::test]
async fn registers_and_verifies_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let state = test.into_app_state();

    let response = respond(
        register(
            State(state.clone()),
            test.session.clone(),
            CookieJar::new(),
            Json(RegisterDto {
                name: "Ada".to_string(),
                email: "ada@example.test".to_string(),
                password: TEST_PASSWORD.to_string(),
                password_confirmation: TEST_PASSWORD.to_string(),
            }),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::CREATED);

    let mail = state.mailer.sent().pop().unwrap();
    assert!(mail.body.contains("/api/applicant/email/verify?token="));

    let response = respond(
        verify_email(
            State(state.clone()),
            Query(VerifyEmailParams {
                token: sent_token(&mail.body),
            }),
        )
        .await,
    );
    assert_eq!(response.status(), StatusCode::OK);

    let response = respond(me(State(state), test.session.clone(), CookieJar::new()).await);
    let applicant: ApplicantDto = json_body(response).await;
    assert!(applicant.email_verified);
    assert_eq!(applicant.name, "Ada");

    Ok(())
}

/// Expect 400 for an unknown verification token
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;

    let result = verify_email(
        State(test.into_app_state()),
        Query(VerifyEmailParams {
            token: "unknown".to_string(),
        }),
    )
    .await;

    assert_eq!(status(result), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect applicant logout to keep a company logged in on the same session
#[tokio::test]
async fn logout_keeps_other_guard() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let company = test.company().insert("jobs@acme.test").await?;
    let applicant = test.applicant().insert("ada@example.test").await?;
    log_in(&test, Guard::Company, company.id).await;
    log_in(&test, Guard::Applicant, applicant.id).await;

    let result = logout(
        State(test.into_app_state()),
        test.session.clone(),
        CookieJar::new(),
    )
    .await;

    assert_eq!(status(result), StatusCode::NO_CONTENT);
    assert!(SessionPrincipalId::get(&test.session, Guard::Applicant)
        .await
        .unwrap()
        .is_none());
    assert_eq!(
        SessionPrincipalId::get(&test.session, Guard::Company)
            .await
            .unwrap(),
        Some(company.id)
    );

    Ok(())
}
