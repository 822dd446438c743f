use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::{ApplicantModel, JobApplicationModel, JobListingModel};

pub struct ApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationRepository<'a, C> {
    /// Creates a new instance of [`ApplicationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        job_listing_id: i32,
        applicant_id: i32,
        cover_letter: Option<String>,
        now: NaiveDateTime,
    ) -> Result<JobApplicationModel, DbErr> {
        entity::job_application::ActiveModel {
            job_listing_id: ActiveValue::Set(job_listing_id),
            applicant_id: ActiveValue::Set(applicant_id),
            cover_letter: ActiveValue::Set(cover_letter),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn exists(&self, job_listing_id: i32, applicant_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::JobApplication::find()
            .filter(entity::job_application::Column::JobListingId.eq(job_listing_id))
            .filter(entity::job_application::Column::ApplicantId.eq(applicant_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applications sent by an applicant with the listing applied to, newest first
    pub async fn list_for_applicant(
        &self,
        applicant_id: i32,
    ) -> Result<Vec<(JobApplicationModel, Option<JobListingModel>)>, DbErr> {
        entity::prelude::JobApplication::find()
            .filter(entity::job_application::Column::ApplicantId.eq(applicant_id))
            .find_also_related(entity::prelude::JobListing)
            .order_by_desc(entity::job_application::Column::CreatedAt)
            .order_by_desc(entity::job_application::Column::Id)
            .all(self.db)
            .await
    }

    /// Applications received for a listing with the applicant, newest first
    pub async fn list_for_listing(
        &self,
        job_listing_id: i32,
    ) -> Result<Vec<(JobApplicationModel, Option<ApplicantModel>)>, DbErr> {
        entity::prelude::JobApplication::find()
            .filter(entity::job_application::Column::JobListingId.eq(job_listing_id))
            .find_also_related(entity::prelude::Applicant)
            .order_by_desc(entity::job_application::Column::CreatedAt)
            .order_by_desc(entity::job_application::Column::Id)
            .all(self.db)
            .await
    }
}
