use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::db::{CareerPageImageModel, CareerPageModel, CareerPageVideoModel};

/// Editable columns of a career page
#[derive(Clone, Debug, PartialEq)]
pub struct CareerPageFields {
    pub slug: String,
    pub custom_domain: Option<String>,
    pub headline: String,
    pub about: Option<String>,
}

pub struct CareerPageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CareerPageRepository<'a, C> {
    /// Creates a new instance of [`CareerPageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_company(&self, company_id: i32) -> Result<Option<CareerPageModel>, DbErr> {
        entity::prelude::CareerPage::find()
            .filter(entity::career_page::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<CareerPageModel>, DbErr> {
        entity::prelude::CareerPage::find()
            .filter(entity::career_page::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Whether another company's page already uses `slug`
    pub async fn slug_taken(&self, slug: &str, company_id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::CareerPage::find()
            .filter(entity::career_page::Column::Slug.eq(slug))
            .filter(entity::career_page::Column::CompanyId.ne(company_id))
            .one(self.db)
            .await?
            .is_some())
    }

    /// Whether another company's page already uses `domain`
    pub async fn domain_taken(&self, domain: &str, company_id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::CareerPage::find()
            .filter(entity::career_page::Column::CustomDomain.eq(domain))
            .filter(entity::career_page::Column::CompanyId.ne(company_id))
            .one(self.db)
            .await?
            .is_some())
    }

    /// Creates the company's page or updates the existing one
    pub async fn upsert(
        &self,
        company_id: i32,
        fields: CareerPageFields,
        now: NaiveDateTime,
    ) -> Result<CareerPageModel, DbErr> {
        match self.find_by_company(company_id).await? {
            Some(page) => {
                let mut page_am = page.into_active_model();
                page_am.slug = ActiveValue::Set(fields.slug);
                page_am.custom_domain = ActiveValue::Set(fields.custom_domain);
                page_am.headline = ActiveValue::Set(fields.headline);
                page_am.about = ActiveValue::Set(fields.about);
                page_am.updated_at = ActiveValue::Set(now);

                page_am.update(self.db).await
            }
            None => {
                entity::career_page::ActiveModel {
                    company_id: ActiveValue::Set(company_id),
                    slug: ActiveValue::Set(fields.slug),
                    custom_domain: ActiveValue::Set(fields.custom_domain),
                    headline: ActiveValue::Set(fields.headline),
                    about: ActiveValue::Set(fields.about),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    pub async fn images(&self, career_page_id: i32) -> Result<Vec<CareerPageImageModel>, DbErr> {
        entity::prelude::CareerPageImage::find()
            .filter(entity::career_page_image::Column::CareerPageId.eq(career_page_id))
            .order_by_asc(entity::career_page_image::Column::Position)
            .order_by_asc(entity::career_page_image::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn videos(&self, career_page_id: i32) -> Result<Vec<CareerPageVideoModel>, DbErr> {
        entity::prelude::CareerPageVideo::find()
            .filter(entity::career_page_video::Column::CareerPageId.eq(career_page_id))
            .order_by_asc(entity::career_page_video::Column::Position)
            .order_by_asc(entity::career_page_video::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the page's videos with `urls` in the given order
    pub async fn replace_videos(
        &self,
        career_page_id: i32,
        urls: Vec<String>,
        now: NaiveDateTime,
    ) -> Result<(), DbErr> {
        entity::prelude::CareerPageVideo::delete_many()
            .filter(entity::career_page_video::Column::CareerPageId.eq(career_page_id))
            .exec(self.db)
            .await?;

        if urls.is_empty() {
            return Ok(());
        }

        let videos = urls
            .into_iter()
            .enumerate()
            .map(|(position, url)| entity::career_page_video::ActiveModel {
                career_page_id: ActiveValue::Set(career_page_id),
                url: ActiveValue::Set(url),
                position: ActiveValue::Set(position as i32),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::CareerPageVideo::insert_many(videos)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Appends an image after the page's last image
    pub async fn add_image(
        &self,
        career_page_id: i32,
        path: String,
        now: NaiveDateTime,
    ) -> Result<CareerPageImageModel, DbErr> {
        let last_position: Option<i32> = entity::prelude::CareerPageImage::find()
            .select_only()
            .column(entity::career_page_image::Column::Position)
            .filter(entity::career_page_image::Column::CareerPageId.eq(career_page_id))
            .order_by_desc(entity::career_page_image::Column::Position)
            .into_tuple::<i32>()
            .one(self.db)
            .await?;

        entity::career_page_image::ActiveModel {
            career_page_id: ActiveValue::Set(career_page_id),
            path: ActiveValue::Set(path),
            position: ActiveValue::Set(last_position.map_or(0, |p| p + 1)),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds an image belonging to the given page
    pub async fn find_image(
        &self,
        career_page_id: i32,
        image_id: i32,
    ) -> Result<Option<CareerPageImageModel>, DbErr> {
        entity::prelude::CareerPageImage::find_by_id(image_id)
            .filter(entity::career_page_image::Column::CareerPageId.eq(career_page_id))
            .one(self.db)
            .await
    }

    pub async fn delete_image(&self, image_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::CareerPageImage::delete_by_id(image_id)
            .exec(self.db)
            .await
    }
}
