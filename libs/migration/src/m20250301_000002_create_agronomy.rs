use crate::{add_touch_trigger, drop_touch_trigger};
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Crops::Table)
                    .if_not_exists()
                    .col(big_integer(Crops::Id).auto_increment().primary_key())
                    .col(string_len(Crops::Name, 50))
                    .col(
                        timestamp_with_time_zone(Crops::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Crops::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Fields::Table)
                    .if_not_exists()
                    .col(big_integer(Fields::Id).auto_increment().primary_key())
                    .col(string_len(Fields::Name, 100))
                    .col(big_integer(Fields::LeaseTypeId))
                    .col(
                        timestamp_with_time_zone(Fields::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Fields::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Lots::Table)
                    .if_not_exists()
                    .col(big_integer(Lots::Id).auto_increment().primary_key())
                    .col(string_len(Lots::Name, 100))
                    .col(double(Lots::Hectares))
                    .col(string_len(Lots::Season, 20))
                    .col(big_integer(Lots::FieldId))
                    .col(big_integer(Lots::PreviousCropId))
                    .col(big_integer(Lots::CurrentCropId))
                    .col(
                        timestamp_with_time_zone(Lots::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Lots::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lots_field_id")
                            .from(Lots::Table, Lots::FieldId)
                            .to(Fields::Table, Fields::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lots_previous_crop_id")
                            .from(Lots::Table, Lots::PreviousCropId)
                            .to(Crops::Table, Crops::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lots_current_crop_id")
                            .from(Lots::Table, Lots::CurrentCropId)
                            .to(Crops::Table, Crops::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lots_field_id")
                    .table(Lots::Table)
                    .col(Lots::FieldId)
                    .to_owned(),
            )
            .await?;

        for table in ["crops", "fields", "lots"] {
            add_touch_trigger(manager, table).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in ["lots", "fields", "crops"] {
            drop_touch_trigger(manager, table).await?;
        }

        manager
            .drop_table(Table::drop().table(Lots::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Fields::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Crops::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Crops {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Fields {
    Table,
    Id,
    Name,
    LeaseTypeId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Lots {
    Table,
    Id,
    Name,
    Hectares,
    Season,
    FieldId,
    PreviousCropId,
    CurrentCropId,
    CreatedAt,
    UpdatedAt,
}
