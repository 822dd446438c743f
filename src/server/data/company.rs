use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel};

use crate::server::model::db::CompanyModel;

/// Which branding column an image is stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandingSlot {
    Logo,
    Banner,
}

pub struct CompanyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompanyRepository<'a, C> {
    /// Creates a new instance of [`CompanyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, company_id: i32) -> Result<Option<CompanyModel>, DbErr> {
        entity::prelude::Company::find_by_id(company_id)
            .one(self.db)
            .await
    }

    /// Updates the public profile fields of a company
    pub async fn update_profile(
        &self,
        company: CompanyModel,
        name: String,
        website: Option<String>,
        description: Option<String>,
        now: NaiveDateTime,
    ) -> Result<CompanyModel, DbErr> {
        let mut company_am = company.into_active_model();
        company_am.name = ActiveValue::Set(name);
        company_am.website = ActiveValue::Set(website);
        company_am.description = ActiveValue::Set(description);
        company_am.updated_at = ActiveValue::Set(now);

        company_am.update(self.db).await
    }

    /// Points a branding slot at a stored image, `None` clears it
    pub async fn set_branding_path(
        &self,
        company: CompanyModel,
        slot: BrandingSlot,
        path: Option<String>,
        now: NaiveDateTime,
    ) -> Result<CompanyModel, DbErr> {
        let mut company_am = company.into_active_model();

        match slot {
            BrandingSlot::Logo => company_am.logo_path = ActiveValue::Set(path),
            BrandingSlot::Banner => company_am.banner_path = ActiveValue::Set(path),
        }
        company_am.updated_at = ActiveValue::Set(now);

        company_am.update(self.db).await
    }
}
