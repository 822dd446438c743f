//! Company career pages.
//!
//! A company has at most one career page, addressed publicly by its slug. Slugs and custom
//! domains are unique across companies. Videos are replaced wholesale on every update while
//! images are managed one upload at a time.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};
use validator::Validate;

use crate::{
    model::career::{
        CareerPageDto, CareerPageImageDto, PublicCareerPageDto, UpdateCareerPageDto,
    },
    server::{
        data::{
            career_page::{CareerPageFields, CareerPageRepository},
            company::CompanyRepository,
            job_listing::JobListingRepository,
            subscription::SubscriptionRepository,
        },
        error::{career::CareerPageError, validation::ValidationError, Error},
        model::db::{CareerPageImageModel, CareerPageModel},
        service::{
            board::public_listing_dto,
            image::{ImageKind, ImageService},
        },
        storage::Storage,
        util::time::now,
    },
};

pub struct CareerPageService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a Storage,
}

impl<'a> CareerPageService<'a> {
    /// Creates a new instance of [`CareerPageService`]
    pub fn new(db: &'a DatabaseConnection, storage: &'a Storage) -> Self {
        Self { db, storage }
    }

    fn image_dto(&self, image: CareerPageImageModel) -> CareerPageImageDto {
        CareerPageImageDto {
            id: image.id,
            url: self.storage.url(&image.path),
            position: image.position,
        }
    }

    async fn page_dto(&self, page: CareerPageModel) -> Result<CareerPageDto, Error> {
        let repo = CareerPageRepository::new(self.db);

        let images = repo.images(page.id).await?;
        let videos = repo.videos(page.id).await?;

        Ok(CareerPageDto {
            slug: page.slug,
            custom_domain: page.custom_domain,
            headline: page.headline,
            about: page.about,
            images: images.into_iter().map(|i| self.image_dto(i)).collect(),
            videos: videos.into_iter().map(|v| v.url).collect(),
            updated_at: page.updated_at,
        })
    }

    async fn page(&self, company_id: i32) -> Result<CareerPageModel, Error> {
        CareerPageRepository::new(self.db)
            .find_by_company(company_id)
            .await?
            .ok_or_else(|| CareerPageError::NotConfigured(company_id).into())
    }

    /// The company's own career page
    ///
    /// # Returns
    /// - `Ok(CareerPageDto)` - Page with images and videos in position order
    /// - `Err(CareerPageError::NotConfigured)` - The company has no page yet
    pub async fn get(&self, company_id: i32) -> Result<CareerPageDto, Error> {
        let page = self.page(company_id).await?;

        self.page_dto(page).await
    }

    /// Creates or updates the company's career page.
    ///
    /// The page fields and its video list are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(CareerPageDto)` - Saved page
    /// - `Err(ValidationError)` - Invalid fields, or slug/custom domain used by another company
    pub async fn update(
        &self,
        company_id: i32,
        dto: UpdateCareerPageDto,
    ) -> Result<CareerPageDto, Error> {
        let custom_domain = dto
            .custom_domain
            .map(|d| d.trim().to_lowercase())
            .filter(|d| !d.is_empty());
        let dto = UpdateCareerPageDto {
            slug: dto.slug.trim().to_string(),
            custom_domain,
            headline: dto.headline.trim().to_string(),
            about: dto.about.filter(|a| !a.trim().is_empty()),
            ..dto
        };
        dto.validate().map_err(ValidationError::from)?;

        let repo = CareerPageRepository::new(self.db);

        if repo.slug_taken(&dto.slug, company_id).await? {
            return Err(ValidationError::field("slug", "The slug has already been taken.").into());
        }

        if let Some(domain) = &dto.custom_domain {
            if repo.domain_taken(domain, company_id).await? {
                return Err(ValidationError::field(
                    "custom_domain",
                    "The custom domain has already been taken.",
                )
                .into());
            }
        }

        let now = now();
        let fields = CareerPageFields {
            slug: dto.slug,
            custom_domain: dto.custom_domain,
            headline: dto.headline,
            about: dto.about,
        };

        let txn = self.db.begin().await?;

        let txn_repo = CareerPageRepository::new(&txn);
        let page = txn_repo.upsert(company_id, fields, now).await?;
        txn_repo.replace_videos(page.id, dto.videos, now).await?;

        txn.commit().await?;

        tracing::info!(company_id, slug = %page.slug, "Saved career page");

        self.page_dto(page).await
    }

    /// Stores an uploaded image and appends it to the company's page
    pub async fn add_image(
        &self,
        company_id: i32,
        bytes: Vec<u8>,
    ) -> Result<CareerPageImageDto, Error> {
        let page = self.page(company_id).await?;
        let image_service = ImageService::new(self.storage);

        let path = image_service.store(ImageKind::CareerPage, bytes).await?;

        let image = match CareerPageRepository::new(self.db)
            .add_image(page.id, path.clone(), now())
            .await
        {
            Ok(image) => image,
            Err(e) => {
                image_service.delete(&path).await;

                return Err(e.into());
            }
        };

        tracing::info!(company_id, image_id = image.id, "Added career page image");

        Ok(self.image_dto(image))
    }

    /// Deletes one of the company's career page images with its files
    ///
    /// # Returns
    /// - `Ok(())` - Image removed
    /// - `Err(CareerPageError::ImageNotFound)` - No such image on this company's page
    pub async fn delete_image(&self, company_id: i32, image_id: i32) -> Result<(), Error> {
        let page = self.page(company_id).await?;
        let repo = CareerPageRepository::new(self.db);

        let Some(image) = repo.find_image(page.id, image_id).await? else {
            return Err(CareerPageError::ImageNotFound(image_id).into());
        };

        repo.delete_image(image.id).await?;

        if !ImageService::new(self.storage).delete(&image.path).await {
            tracing::warn!(
                "No files found for career page image ID {} at {}",
                image.id,
                image.path
            );
        }

        Ok(())
    }

    /// Public career page with the company's branding and visible listings
    ///
    /// # Returns
    /// - `Ok(PublicCareerPageDto)` - Page found
    /// - `Err(CareerPageError::SlugNotFound)` - No page uses this slug
    pub async fn public(&self, slug: &str) -> Result<PublicCareerPageDto, Error> {
        let not_found = || CareerPageError::SlugNotFound(slug.to_string());

        let page = CareerPageRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(not_found)?;
        let company = CompanyRepository::new(self.db)
            .find_by_id(page.company_id)
            .await?
            .ok_or_else(not_found)?;

        let now = now();
        let featured_ids = SubscriptionRepository::new(self.db)
            .featured_listing_ids(now)
            .await?;
        let listings = JobListingRepository::new(self.db)
            .public_for_company(company.id, now)
            .await?
            .into_iter()
            .map(|listing| {
                let featured = featured_ids.contains(&listing.id);

                public_listing_dto(listing, &company, featured, self.storage)
            })
            .collect();

        let logo_url = company.logo_path.as_deref().map(|p| self.storage.url(p));
        let banner_url = company.banner_path.as_deref().map(|p| self.storage.url(p));

        Ok(PublicCareerPageDto {
            company_name: company.name,
            company_website: company.website,
            logo_url,
            banner_url,
            page: self.page_dto(page).await?,
            listings,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use entity::sea_orm_active_enums::JobListingStatus;
    use hireboard_test_utils::prelude::*;
    use image::{ImageFormat, Rgb, RgbImage};

    use crate::{
        model::career::UpdateCareerPageDto,
        server::{
            error::{career::CareerPageError, Error},
            service::career_page::CareerPageService,
            storage::Storage,
        },
    };

    fn storage(test: &TestContext) -> Storage {
        Storage::new(test.storage_dir.path(), "http://localhost:8080")
    }

    fn update(slug: &str) -> UpdateCareerPageDto {
        UpdateCareerPageDto {
            slug: slug.to_string(),
            custom_domain: None,
            headline: "Build rockets with us".to_string(),
            about: Some("We are hiring.".to_string()),
            videos: vec![
                "https://videos.test/intro".to_string(),
                "https://videos.test/office".to_string(),
            ],
        }
    }

    fn jpeg() -> Vec<u8> {
        let mut buf = Vec::new();
        RgbImage::from_pixel(640, 480, Rgb([0, 160, 90]))
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Jpeg)
            .unwrap();

        buf
    }

    mod update {
        use super::*;

        /// Expect the page to be created with its videos in order
        #[tokio::test]
        async fn creates_page_with_videos() -> Result<(), TestError> {
            let test = TestBuilder::new().with_career_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let storage = storage(&test);

            let page = CareerPageService::new(&test.db, &storage)
                .update(company.id, update("acme"))
                .await
                .unwrap();

            assert_eq!(page.slug, "acme");
            assert_eq!(
                page.videos,
                vec!["https://videos.test/intro", "https://videos.test/office"]
            );

            Ok(())
        }

        /// Expect a slug owned by another company to fail validation
        #[tokio::test]
        async fn rejects_taken_slug() -> Result<(), TestError> {
            let test = TestBuilder::new().with_career_tables().build().await?;
            let acme = test.company().insert("jobs@acme.test").await?;
            let globex = test.company().insert("jobs@globex.test").await?;
            let storage = storage(&test);
            let service = CareerPageService::new(&test.db, &storage);
            service.update(acme.id, update("rockets")).await.unwrap();

            let result = service.update(globex.id, update("rockets")).await;

            let Err(Error::ValidationError(err)) = result else {
                panic!("expected validation error");
            };
            assert!(err.messages().contains_key("slug"));

            Ok(())
        }

        /// Expect custom domains to be compared case-insensitively
        #[tokio::test]
        async fn rejects_taken_domain() -> Result<(), TestError> {
            let test = TestBuilder::new().with_career_tables().build().await?;
            let acme = test.company().insert("jobs@acme.test").await?;
            let globex = test.company().insert("jobs@globex.test").await?;
            let storage = storage(&test);
            let service = CareerPageService::new(&test.db, &storage);
            let mut acme_page = update("acme");
            acme_page.custom_domain = Some("careers.acme.test".to_string());
            service.update(acme.id, acme_page).await.unwrap();

            let mut globex_page = update("globex");
            globex_page.custom_domain = Some("Careers.Acme.test".to_string());
            let result = service.update(globex.id, globex_page).await;

            assert!(matches!(result, Err(Error::ValidationError(_))));

            Ok(())
        }

        /// Expect malformed slugs to be rejected
        #[tokio::test]
        async fn rejects_invalid_slug() -> Result<(), TestError> {
            let test = TestBuilder::new().with_career_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let storage = storage(&test);

            let result = CareerPageService::new(&test.db, &storage)
                .update(company.id, update("Acme Rockets"))
                .await;

            assert!(matches!(result, Err(Error::ValidationError(_))));

            Ok(())
        }
    }

    mod images {
        use super::*;

        /// Expect uploading before the page exists to be reported
        #[tokio::test]
        async fn requires_configured_page() -> Result<(), TestError> {
            let test = TestBuilder::new().with_career_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let storage = storage(&test);

            let result = CareerPageService::new(&test.db, &storage)
                .add_image(company.id, jpeg())
                .await;

            assert!(matches!(
                result,
                Err(Error::CareerPageError(CareerPageError::NotConfigured(_)))
            ));

            Ok(())
        }

        /// Expect images to be appended and deletable with their files
        #[tokio::test]
        async fn adds_and_deletes_images() -> Result<(), TestError> {
            let test = TestBuilder::new().with_career_tables().build().await?;
            let company = test.company().insert("jobs@acme.test").await?;
            let storage = storage(&test);
            let service = CareerPageService::new(&test.db, &storage);
            service.update(company.id, update("acme")).await.unwrap();

            let first = service.add_image(company.id, jpeg()).await.unwrap();
            let second = service.add_image(company.id, jpeg()).await.unwrap();
            assert_eq!((first.position, second.position), (0, 1));

            service.delete_image(company.id, first.id).await.unwrap();

            let page = service.get(company.id).await.unwrap();
            assert_eq!(page.images.len(), 1);
            assert_eq!(page.images[0].id, second.id);

            let result = service.delete_image(company.id, first.id).await;
            assert!(matches!(
                result,
                Err(Error::CareerPageError(CareerPageError::ImageNotFound(_)))
            ));

            Ok(())
        }

        /// Expect another company's image to be out of reach
        #[tokio::test]
        async fn scopes_delete_to_company() -> Result<(), TestError> {
            let test = TestBuilder::new().with_career_tables().build().await?;
            let acme = test.company().insert("jobs@acme.test").await?;
            let globex = test.company().insert("jobs@globex.test").await?;
            let storage = storage(&test);
            let service = CareerPageService::new(&test.db, &storage);
            service.update(acme.id, update("acme")).await.unwrap();
            service.update(globex.id, update("globex")).await.unwrap();
            let image = service.add_image(acme.id, jpeg()).await.unwrap();

            let result = service.delete_image(globex.id, image.id).await;

            assert!(matches!(
                result,
                Err(Error::CareerPageError(CareerPageError::ImageNotFound(_)))
            ));

            Ok(())
        }
    }

    mod public {
        use super::*;

        /// Expect only publicly visible listings of the page's company
        #[tokio::test]
        async fn shows_visible_listings() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_career_tables()
                .with_listing_tables()
                .build()
                .await?;
            let acme = test.company().insert("jobs@acme.test").await?;
            let globex = test.company().insert("jobs@globex.test").await?;
            let published = test
                .listing()
                .insert(acme.id, JobListingStatus::Published)
                .await?;
            test.listing()
                .insert(acme.id, JobListingStatus::Draft)
                .await?;
            test.listing()
                .insert(globex.id, JobListingStatus::Published)
                .await?;
            let storage = storage(&test);
            let service = CareerPageService::new(&test.db, &storage);
            service.update(acme.id, update("acme")).await.unwrap();

            let page = service.public("acme").await.unwrap();

            assert_eq!(page.company_name, acme.name);
            assert_eq!(page.page.slug, "acme");
            let ids: Vec<i32> = page.listings.iter().map(|l| l.id).collect();
            assert_eq!(ids, vec![published.id]);

            Ok(())
        }

        #[tokio::test]
        async fn fails_for_unknown_slug() -> Result<(), TestError> {
            let test = TestBuilder::new().with_career_tables().build().await?;
            let storage = storage(&test);

            let result = CareerPageService::new(&test.db, &storage)
                .public("nobody")
                .await;

            assert!(matches!(
                result,
                Err(Error::CareerPageError(CareerPageError::SlugNotFound(_)))
            ));

            Ok(())
        }
    }
}
