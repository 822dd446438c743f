//! Credential provider shared by both guards.
//!
//! Companies and applicants live in separate tables with the same authentication columns. The
//! repository is constructed for one guard and only ever touches that guard's table.

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::{
    model::applicant::ApplicantDto,
    server::model::{
        auth::Guard,
        db::{ApplicantModel, CompanyModel},
    },
};

/// Authentication columns of a company or applicant
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub remember_token: Option<String>,
    pub email_verified_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl Credentials {
    pub fn is_verified(&self) -> bool {
        self.email_verified_at.is_some()
    }
}

impl From<Credentials> for ApplicantDto {
    fn from(applicant: Credentials) -> Self {
        Self {
            email_verified: applicant.is_verified(),
            id: applicant.id,
            name: applicant.name,
            email: applicant.email,
            created_at: applicant.created_at,
        }
    }
}

impl From<CompanyModel> for Credentials {
    fn from(company: CompanyModel) -> Self {
        Self {
            id: company.id,
            name: company.name,
            email: company.email,
            password_hash: company.password_hash,
            remember_token: company.remember_token,
            email_verified_at: company.email_verified_at,
            created_at: company.created_at,
        }
    }
}

impl From<ApplicantModel> for Credentials {
    fn from(applicant: ApplicantModel) -> Self {
        Self {
            id: applicant.id,
            name: applicant.name,
            email: applicant.email,
            password_hash: applicant.password_hash,
            remember_token: applicant.remember_token,
            email_verified_at: applicant.email_verified_at,
            created_at: applicant.created_at,
        }
    }
}

pub struct PrincipalRepository<'a, C: ConnectionTrait> {
    db: &'a C,
    guard: Guard,
}

impl<'a, C: ConnectionTrait> PrincipalRepository<'a, C> {
    /// Creates a new instance of [`PrincipalRepository`] bound to `guard`'s table
    pub fn new(db: &'a C, guard: Guard) -> Self {
        Self { db, guard }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Credentials>, DbErr> {
        Ok(match self.guard {
            Guard::Company => entity::prelude::Company::find_by_id(id)
                .one(self.db)
                .await?
                .map(Credentials::from),
            Guard::Applicant => entity::prelude::Applicant::find_by_id(id)
                .one(self.db)
                .await?
                .map(Credentials::from),
        })
    }

    /// Finds a principal by email, emails are stored lowercased
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Credentials>, DbErr> {
        let email = email.trim().to_lowercase();

        Ok(match self.guard {
            Guard::Company => entity::prelude::Company::find()
                .filter(entity::company::Column::Email.eq(email))
                .one(self.db)
                .await?
                .map(Credentials::from),
            Guard::Applicant => entity::prelude::Applicant::find()
                .filter(entity::applicant::Column::Email.eq(email))
                .one(self.db)
                .await?
                .map(Credentials::from),
        })
    }

    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: String,
        now: NaiveDateTime,
    ) -> Result<Credentials, DbErr> {
        let name = name.trim().to_string();
        let email = email.trim().to_lowercase();

        Ok(match self.guard {
            Guard::Company => entity::company::ActiveModel {
                name: ActiveValue::Set(name),
                email: ActiveValue::Set(email),
                password_hash: ActiveValue::Set(password_hash),
                email_verified_at: ActiveValue::Set(None),
                remember_token: ActiveValue::Set(None),
                website: ActiveValue::Set(None),
                description: ActiveValue::Set(None),
                logo_path: ActiveValue::Set(None),
                banner_path: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(self.db)
            .await?
            .into(),
            Guard::Applicant => entity::applicant::ActiveModel {
                name: ActiveValue::Set(name),
                email: ActiveValue::Set(email),
                password_hash: ActiveValue::Set(password_hash),
                email_verified_at: ActiveValue::Set(None),
                remember_token: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(self.db)
            .await?
            .into(),
        })
    }

    /// Stores or clears the remember token
    ///
    /// # Returns
    /// - `Ok(true)` - Token updated
    /// - `Ok(false)` - Principal does not exist
    pub async fn set_remember_token(&self, id: i32, token: Option<String>) -> Result<bool, DbErr> {
        match self.guard {
            Guard::Company => {
                let Some(company) = entity::prelude::Company::find_by_id(id).one(self.db).await?
                else {
                    return Ok(false);
                };

                let mut company_am = company.into_active_model();
                company_am.remember_token = ActiveValue::Set(token);
                company_am.update(self.db).await?;
            }
            Guard::Applicant => {
                let Some(applicant) = entity::prelude::Applicant::find_by_id(id)
                    .one(self.db)
                    .await?
                else {
                    return Ok(false);
                };

                let mut applicant_am = applicant.into_active_model();
                applicant_am.remember_token = ActiveValue::Set(token);
                applicant_am.update(self.db).await?;
            }
        }

        Ok(true)
    }

    /// Marks the principal's email as verified, keeping an earlier verification time
    ///
    /// # Returns
    /// - `Ok(Some(_))` - Principal verified (now or previously)
    /// - `Ok(None)` - Principal does not exist
    pub async fn mark_email_verified(
        &self,
        id: i32,
        now: NaiveDateTime,
    ) -> Result<Option<Credentials>, DbErr> {
        match self.guard {
            Guard::Company => {
                let Some(company) = entity::prelude::Company::find_by_id(id).one(self.db).await?
                else {
                    return Ok(None);
                };

                if company.email_verified_at.is_some() {
                    return Ok(Some(company.into()));
                }

                let mut company_am = company.into_active_model();
                company_am.email_verified_at = ActiveValue::Set(Some(now));
                company_am.updated_at = ActiveValue::Set(now);

                Ok(Some(company_am.update(self.db).await?.into()))
            }
            Guard::Applicant => {
                let Some(applicant) = entity::prelude::Applicant::find_by_id(id)
                    .one(self.db)
                    .await?
                else {
                    return Ok(None);
                };

                if applicant.email_verified_at.is_some() {
                    return Ok(Some(applicant.into()));
                }

                let mut applicant_am = applicant.into_active_model();
                applicant_am.email_verified_at = ActiveValue::Set(Some(now));
                applicant_am.updated_at = ActiveValue::Set(now);

                Ok(Some(applicant_am.update(self.db).await?.into()))
            }
        }
    }
}
