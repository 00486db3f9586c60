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
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(big_integer(Customers::Id).auto_increment().primary_key())
                    .col(string_len(Customers::Name, 100))
                    .col(string_len(Customers::Type, 100))
                    .col(
                        timestamp_with_time_zone(Customers::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Customers::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // GIN trigram index backing the suggestion endpoint
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX IF NOT EXISTS idx_customers_name_trgm \
                 ON customers USING gin (name gin_trgm_ops)",
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Managers::Table)
                    .if_not_exists()
                    .col(big_integer(Managers::Id).auto_increment().primary_key())
                    .col(string_len(Managers::Name, 100))
                    .col(string_len(Managers::Type, 50))
                    .col(
                        timestamp_with_time_zone(Managers::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Managers::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Investors::Table)
                    .if_not_exists()
                    .col(big_integer(Investors::Id).auto_increment().primary_key())
                    .col(string_len(Investors::Name, 255))
                    .col(double(Investors::Contributions).default(0.0))
                    .col(date(Investors::ContributionDate).default(Expr::current_date()))
                    .col(integer(Investors::Percentage).default(0))
                    .col(
                        timestamp_with_time_zone(Investors::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Investors::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        for table in ["customers", "managers", "investors"] {
            add_touch_trigger(manager, table).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in ["investors", "managers", "customers"] {
            drop_touch_trigger(manager, table).await?;
        }

        manager
            .drop_table(Table::drop().table(Investors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Managers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
    Name,
    Type,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Managers {
    Table,
    Id,
    Name,
    Type,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Investors {
    Table,
    Id,
    Name,
    Contributions,
    ContributionDate,
    Percentage,
    CreatedAt,
    UpdatedAt,
}
