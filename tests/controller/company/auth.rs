use hireboard::{
    model::company::{CompanyDto, LoginDto, RegisterDto},
    server::{
        controller::company::auth::{login, me, register, resend_verification},
        model::{auth::Guard, session::principal::SessionPrincipalId},
    },
};

use super::*;

fn registration(email: &str) -> RegisterDto {
    RegisterDto {
        name: "Acme".to_string(),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        password_confirmation: TEST_PASSWORD.to_string(),
    }
}

mod register {
    use super::*;

    /// Expect 201 with the company logged in and a verification mail sent
    #[tokio::test]
    async fn registers_and_logs_in() -> Result<(), TestError> {
        let test = TestBuilder::new().with_auth_tables().build().await?;
        let state = test.into_app_state();

        let response = respond(
            register(
                State(state.clone()),
                test.session.clone(),
                CookieJar::new(),
                Json(registration("Jobs@Acme.test")),
            )
            .await,
        );

        assert_eq!(response.status(), StatusCode::CREATED);
        let company: CompanyDto = json_body(response).await;
        assert_eq!(company.email, "jobs@acme.test");
        assert!(!company.email_verified);
        assert_eq!(
            SessionPrincipalId::get(&test.session, Guard::Company)
                .await
                .unwrap(),
            Some(company.id)
        );

        let sent = state.mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "jobs@acme.test");

        Ok(())
    }

    /// Expect 422 when the email is already registered on the company guard
    #[tokio::test]
    async fn rejects_taken_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_auth_tables().build().await?;
        test.company().insert("jobs@acme.test").await?;

        let result = register(
            State(test.into_app_state()),
            test.session.clone(),
            CookieJar::new(),
            Json(registration("jobs@acme.test")),
        )
        .await;

        assert_eq!(status(result), StatusCode::UNPROCESSABLE_ENTITY);

        Ok(())
    }
}

mod login {
    use super::*;

    /// Expect 200 for valid credentials
    #[tokio::test]
    async fn logs_in_with_valid_credentials() -> Result<(), TestError> {
        let test = TestBuilder::new().with_auth_tables().build().await?;
        let state = test.into_app_state();
        let company = test
            .company()
            .insert_with_password_hash("jobs@acme.test", &state.hasher.hash(TEST_PASSWORD))
            .await?;

        let result = login(
            State(state),
            test.session.clone(),
            CookieJar::new(),
            Json(LoginDto {
                email: "jobs@acme.test".to_string(),
                password: TEST_PASSWORD.to_string(),
                remember: false,
            }),
        )
        .await;

        assert_eq!(status(result), StatusCode::OK);
        assert_eq!(
            SessionPrincipalId::get(&test.session, Guard::Company)
                .await
                .unwrap(),
            Some(company.id)
        );

        Ok(())
    }

    /// Expect an applicant account not to log in on the company guard
    #[tokio::test]
    async fn rejects_applicant_credentials() -> Result<(), TestError> {
        let test = TestBuilder::new().with_auth_tables().build().await?;
        let state = test.into_app_state();
        test.applicant()
            .insert_with_password_hash("ada@example.test", &state.hasher.hash(TEST_PASSWORD))
            .await?;

        let result = login(
            State(state),
            test.session.clone(),
            CookieJar::new(),
            Json(LoginDto {
                email: "ada@example.test".to_string(),
                password: TEST_PASSWORD.to_string(),
                remember: false,
            }),
        )
        .await;

        assert_eq!(status(result), StatusCode::UNPROCESSABLE_ENTITY);

        Ok(())
    }
}

mod me {
    use super::*;

    /// Expect 401 without a logged in company
    #[tokio::test]
    async fn requires_authentication() -> Result<(), TestError> {
        let test = TestBuilder::new().with_auth_tables().build().await?;

        let result = me(
            State(test.into_app_state()),
            test.session.clone(),
            CookieJar::new(),
        )
        .await;

        assert_eq!(status(result), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect a logged in applicant not to count as a company
    #[tokio::test]
    async fn ignores_applicant_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_auth_tables().build().await?;
        let applicant = test.applicant().insert("ada@example.test").await?;
        log_in(&test, Guard::Applicant, applicant.id).await;

        let result = me(
            State(test.into_app_state()),
            test.session.clone(),
            CookieJar::new(),
        )
        .await;

        assert_eq!(status(result), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod resend_verification {
    use super::*;

    /// Expect 202 and a mail for an unverified company, 204 once verified
    #[tokio::test]
    async fn only_sends_to_unverified_company() -> Result<(), TestError> {
        let test = TestBuilder::new().with_auth_tables().build().await?;
        let state = test.into_app_state();
        let unverified = test.company().insert_unverified("jobs@acme.test").await?;
        let verified = test.company().insert("jobs@globex.test").await?;

        log_in(&test, Guard::Company, unverified.id).await;
        let result =
            resend_verification(State(state.clone()), test.session.clone(), CookieJar::new())
                .await;
        assert_eq!(status(result), StatusCode::ACCEPTED);
        assert_eq!(state.mailer.sent().len(), 1);

        log_in(&test, Guard::Company, verified.id).await;
        let result =
            resend_verification(State(state.clone()), test.session.clone(), CookieJar::new())
                .await;
        assert_eq!(status(result), StatusCode::NO_CONTENT);
        assert_eq!(state.mailer.sent().len(), 1);

        Ok(())
    }
}
