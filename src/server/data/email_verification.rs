use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::Principal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

use crate::server::model::db::EmailVerificationModel;

pub struct EmailVerificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmailVerificationRepository<'a, C> {
    /// Creates a new instance of [`EmailVerificationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        principal: Principal,
        principal_id: i32,
        token: String,
        expires_at: NaiveDateTime,
        now: NaiveDateTime,
    ) -> Result<EmailVerificationModel, DbErr> {
        entity::email_verification::ActiveModel {
            principal: ActiveValue::Set(principal),
            principal_id: ActiveValue::Set(principal_id),
            token: ActiveValue::Set(token),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_token(&self, token: &str) -> Result<Option<EmailVerificationModel>, DbErr> {
        entity::prelude::EmailVerification::find()
            .filter(entity::email_verification::Column::Token.eq(token))
            .one(self.db)
            .await
    }

    /// Deletes every outstanding token of a principal
    pub async fn delete_for_principal(
        &self,
        principal: Principal,
        principal_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::EmailVerification::delete_many()
            .filter(entity::email_verification::Column::Principal.eq(principal))
            .filter(entity::email_verification::Column::PrincipalId.eq(principal_id))
            .exec(self.db)
            .await
    }
}
