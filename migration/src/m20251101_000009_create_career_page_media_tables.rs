use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000008_create_career_page_table::CareerPage;

static FK_CAREER_PAGE_IMAGE_PAGE_ID: &str = "fk_career_page_image_career_page_id";
static FK_CAREER_PAGE_VIDEO_PAGE_ID: &str = "fk_career_page_video_career_page_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CareerPageImage::Table)
                    .if_not_exists()
                    .col(pk_auto(CareerPageImage::Id))
                    .col(integer(CareerPageImage::CareerPageId))
                    .col(string(CareerPageImage::Path))
                    .col(integer(CareerPageImage::Position))
                    .col(timestamp(CareerPageImage::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CareerPageVideo::Table)
                    .if_not_exists()
                    .col(pk_auto(CareerPageVideo::Id))
                    .col(integer(CareerPageVideo::CareerPageId))
                    .col(string(CareerPageVideo::Url))
                    .col(integer(CareerPageVideo::Position))
                    .col(timestamp(CareerPageVideo::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CAREER_PAGE_IMAGE_PAGE_ID)
                    .from_tbl(CareerPageImage::Table)
                    .from_col(CareerPageImage::CareerPageId)
                    .to_tbl(CareerPage::Table)
                    .to_col(CareerPage::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CAREER_PAGE_VIDEO_PAGE_ID)
                    .from_tbl(CareerPageVideo::Table)
                    .from_col(CareerPageVideo::CareerPageId)
                    .to_tbl(CareerPage::Table)
                    .to_col(CareerPage::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CAREER_PAGE_VIDEO_PAGE_ID)
                    .table(CareerPageVideo::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CAREER_PAGE_IMAGE_PAGE_ID)
                    .table(CareerPageImage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CareerPageVideo::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CareerPageImage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CareerPageImage {
    Table,
    Id,
    CareerPageId,
    Path,
    Position,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CareerPageVideo {
    Table,
    Id,
    CareerPageId,
    Url,
    Position,
    CreatedAt,
}
