use sea_orm::{ActiveValue, DbErr, EntityTrait};

use crate::{constant::TEST_PASSWORD_HASH, error::TestError, fixtures::now, TestContext};

impl TestContext {
    pub fn company<'a>(&'a self) -> CompanyFixtures<'a> {
        CompanyFixtures { test: self }
    }

    pub fn applicant<'a>(&'a self) -> ApplicantFixtures<'a> {
        ApplicantFixtures { test: self }
    }
}

/// Name derived from the email's domain, `jobs@acme.test` becomes `acme`
fn name_from_email(email: &str) -> String {
    email
        .split('@')
        .nth(1)
        .and_then(|domain| domain.split('.').next())
        .unwrap_or(email)
        .to_string()
}

pub struct CompanyFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> CompanyFixtures<'a> {
    /// Insert a company with a verified email address
    pub async fn insert(&self, email: &str) -> Result<entity::company::Model, TestError> {
        self.insert_company(email, TEST_PASSWORD_HASH, true, None).await
    }

    pub async fn insert_unverified(&self, email: &str) -> Result<entity::company::Model, TestError> {
        self.insert_company(email, TEST_PASSWORD_HASH, false, None).await
    }

    /// Insert a verified company able to log in with the password behind `password_hash`
    pub async fn insert_with_password_hash(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<entity::company::Model, TestError> {
        self.insert_company(email, password_hash, true, None).await
    }

    /// Insert a verified company holding `token` as its remember token
    pub async fn insert_with_remember_token(
        &self,
        email: &str,
        token: &str,
    ) -> Result<entity::company::Model, TestError> {
        self.insert_company(email, TEST_PASSWORD_HASH, true, Some(token))
            .await
    }

    /// Reload a company, fails if it no longer exists
    pub async fn get(&self, id: i32) -> Result<entity::company::Model, TestError> {
        entity::prelude::Company::find_by_id(id)
            .one(&self.test.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("company {id}")).into())
    }

    async fn insert_company(
        &self,
        email: &str,
        password_hash: &str,
        verified: bool,
        remember_token: Option<&str>,
    ) -> Result<entity::company::Model, TestError> {
        let now = now();

        Ok(
            entity::prelude::Company::insert(entity::company::ActiveModel {
                name: ActiveValue::Set(name_from_email(email)),
                email: ActiveValue::Set(email.to_lowercase()),
                password_hash: ActiveValue::Set(password_hash.to_string()),
                email_verified_at: ActiveValue::Set(verified.then_some(now)),
                remember_token: ActiveValue::Set(remember_token.map(str::to_string)),
                website: ActiveValue::Set(None),
                description: ActiveValue::Set(None),
                logo_path: ActiveValue::Set(None),
                banner_path: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}

pub struct ApplicantFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> ApplicantFixtures<'a> {
    /// Insert an applicant with a verified email address
    pub async fn insert(&self, email: &str) -> Result<entity::applicant::Model, TestError> {
        self.insert_applicant(email, TEST_PASSWORD_HASH, true, None).await
    }

    pub async fn insert_unverified(
        &self,
        email: &str,
    ) -> Result<entity::applicant::Model, TestError> {
        self.insert_applicant(email, TEST_PASSWORD_HASH, false, None).await
    }

    pub async fn insert_with_password_hash(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<entity::applicant::Model, TestError> {
        self.insert_applicant(email, password_hash, true, None).await
    }

    pub async fn insert_with_remember_token(
        &self,
        email: &str,
        token: &str,
    ) -> Result<entity::applicant::Model, TestError> {
        self.insert_applicant(email, TEST_PASSWORD_HASH, true, Some(token))
            .await
    }

    pub async fn get(&self, id: i32) -> Result<entity::applicant::Model, TestError> {
        entity::prelude::Applicant::find_by_id(id)
            .one(&self.test.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("applicant {id}")).into())
    }

    async fn insert_applicant(
        &self,
        email: &str,
        password_hash: &str,
        verified: bool,
        remember_token: Option<&str>,
    ) -> Result<entity::applicant::Model, TestError> {
        let now = now();

        Ok(
            entity::prelude::Applicant::insert(entity::applicant::ActiveModel {
                name: ActiveValue::Set(name_from_email(email)),
                email: ActiveValue::Set(email.to_lowercase()),
                password_hash: ActiveValue::Set(password_hash.to_string()),
                email_verified_at: ActiveValue::Set(verified.then_some(now)),
                remember_token: ActiveValue::Set(remember_token.map(str::to_string)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
