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
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(big_integer(Projects::Id).auto_increment().primary_key())
                    .col(string_len(Projects::Name, 100))
                    .col(big_integer(Projects::CustomerId))
                    .col(
                        timestamp_with_time_zone(Projects::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Projects::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_customer_id")
                            .from(Projects::Table, Projects::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_projects_customer_id")
                    .table(Projects::Table)
                    .col(Projects::CustomerId)
                    .to_owned(),
            )
            .await?;

        add_touch_trigger(manager, "projects").await?;

        manager
            .create_table(
                Table::create()
                    .table(ProjectManagers::Table)
                    .if_not_exists()
                    .col(big_integer(ProjectManagers::ProjectId))
                    .col(big_integer(ProjectManagers::ManagerId))
                    .primary_key(
                        Index::create()
                            .col(ProjectManagers::ProjectId)
                            .col(ProjectManagers::ManagerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_managers_project_id")
                            .from(ProjectManagers::Table, ProjectManagers::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_managers_manager_id")
                            .from(ProjectManagers::Table, ProjectManagers::ManagerId)
                            .to(Managers::Table, Managers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProjectInvestors::Table)
                    .if_not_exists()
                    .col(big_integer(ProjectInvestors::ProjectId))
                    .col(big_integer(ProjectInvestors::InvestorId))
                    .primary_key(
                        Index::create()
                            .col(ProjectInvestors::ProjectId)
                            .col(ProjectInvestors::InvestorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_investors_project_id")
                            .from(ProjectInvestors::Table, ProjectInvestors::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_investors_investor_id")
                            .from(ProjectInvestors::Table, ProjectInvestors::InvestorId)
                            .to(Investors::Table, Investors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProjectFields::Table)
                    .if_not_exists()
                    .col(big_integer(ProjectFields::ProjectId))
                    .col(big_integer(ProjectFields::FieldId))
                    .primary_key(
                        Index::create()
                            .col(ProjectFields::ProjectId)
                            .col(ProjectFields::FieldId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_fields_project_id")
                            .from(ProjectFields::Table, ProjectFields::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_fields_field_id")
                            .from(ProjectFields::Table, ProjectFields::FieldId)
                            .to(Fields::Table, Fields::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectFields::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectInvestors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectManagers::Table).to_owned())
            .await?;

        drop_touch_trigger(manager, "projects").await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Name,
    CustomerId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProjectManagers {
    Table,
    ProjectId,
    ManagerId,
}

#[derive(DeriveIden)]
enum ProjectInvestors {
    Table,
    ProjectId,
    InvestorId,
}

#[derive(DeriveIden)]
enum ProjectFields {
    Table,
    ProjectId,
    FieldId,
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Managers {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Investors {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Fields {
    Table,
    Id,
}
