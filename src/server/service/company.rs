//! Company profile and branding assets.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::{
    model::company::{CompanyDto, ImageDto, UpdateCompanyProfileDto},
    server::{
        data::company::{BrandingSlot, CompanyRepository},
        error::{validation::ValidationError, Error},
        model::db::CompanyModel,
        service::image::{ImageKind, ImageService},
        storage::Storage,
        util::time::now,
    },
};

impl From<BrandingSlot> for ImageKind {
    fn from(slot: BrandingSlot) -> Self {
        match slot {
            BrandingSlot::Logo => Self::Logo,
            BrandingSlot::Banner => Self::Banner,
        }
    }
}

pub fn company_dto(company: CompanyModel, storage: &Storage) -> CompanyDto {
    CompanyDto {
        id: company.id,
        name: company.name,
        email: company.email,
        email_verified: company.email_verified_at.is_some(),
        website: company.website,
        description: company.description,
        logo_url: company.logo_path.as_deref().map(|path| storage.url(path)),
        banner_url: company.banner_path.as_deref().map(|path| storage.url(path)),
        created_at: company.created_at,
    }
}

pub struct CompanyService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a Storage,
}

impl<'a> CompanyService<'a> {
    /// Creates a new instance of [`CompanyService`]
    pub fn new(db: &'a DatabaseConnection, storage: &'a Storage) -> Self {
        Self { db, storage }
    }

    async fn company(&self, company_id: i32) -> Result<CompanyModel, Error> {
        CompanyRepository::new(self.db)
            .find_by_id(company_id)
            .await?
            .ok_or_else(|| {
                // Callers resolve the company through the guard first
                Error::InternalError(format!(
                    "Company ID {} disappeared while handling its request",
                    company_id
                ))
            })
    }

    pub async fn profile(&self, company_id: i32) -> Result<CompanyDto, Error> {
        let company = self.company(company_id).await?;

        Ok(company_dto(company, self.storage))
    }

    pub async fn update_profile(
        &self,
        company_id: i32,
        dto: UpdateCompanyProfileDto,
    ) -> Result<CompanyDto, Error> {
        let website = dto
            .website
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty());
        let dto = UpdateCompanyProfileDto {
            name: dto.name.trim().to_string(),
            website,
            description: dto.description.filter(|d| !d.trim().is_empty()),
        };
        dto.validate().map_err(ValidationError::from)?;

        let company = self.company(company_id).await?;
        let company = CompanyRepository::new(self.db)
            .update_profile(
                company,
                dto.name,
                dto.website,
                dto.description,
                now(),
            )
            .await?;

        Ok(company_dto(company, self.storage))
    }

    /// Stores a new logo or banner and deletes the previous one with its variations.
    ///
    /// The new file set is removed again if the company row cannot be updated.
    pub async fn replace_branding(
        &self,
        company_id: i32,
        slot: BrandingSlot,
        bytes: Vec<u8>,
    ) -> Result<ImageDto, Error> {
        let image_service = ImageService::new(self.storage);

        let company = self.company(company_id).await?;
        let previous = match slot {
            BrandingSlot::Logo => company.logo_path.clone(),
            BrandingSlot::Banner => company.banner_path.clone(),
        };

        let path = image_service.store(slot.into(), bytes).await?;

        if let Err(e) = CompanyRepository::new(self.db)
            .set_branding_path(company, slot, Some(path.clone()), now())
            .await
        {
            image_service.delete(&path).await;

            return Err(e.into());
        }

        if let Some(previous) = previous {
            image_service.delete(&previous).await;
        }

        tracing::info!(company_id, slot = ?slot, path = %path, "Replaced company branding image");

        Ok(ImageDto {
            url: self.storage.url(&path),
            path,
        })
    }

    /// Clears a logo or banner and deletes its files
    ///
    /// # Returns
    /// - `Ok(true)` - An image was removed
    /// - `Ok(false)` - The slot was already empty
    pub async fn remove_branding(&self, company_id: i32, slot: BrandingSlot) -> Result<bool, Error> {
        let company = self.company(company_id).await?;
        let path = match slot {
            BrandingSlot::Logo => company.logo_path.clone(),
            BrandingSlot::Banner => company.banner_path.clone(),
        };

        let Some(path) = path else {
            return Ok(false);
        };

        CompanyRepository::new(self.db)
            .set_branding_path(company, slot, None, now())
            .await?;

        ImageService::new(self.storage).delete(&path).await;

        tracing::info!(company_id, slot = ?slot, "Removed company branding image");

        Ok(true)
    }
}
