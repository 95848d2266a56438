use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_drone_table::Drone;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Load::Table)
                    .if_not_exists()
                    .col(pk_auto(Load::Id))
                    .col(string_len_null(Load::Origin, 100))
                    .col(string_len_null(Load::Destination, 100))
                    .col(
                        timestamp_with_time_zone(Load::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(Load::DroneId))
                    .col(integer(Load::WeightLoaded))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_load_drone_id")
                            .from(Load::Table, Load::DroneId)
                            .to(Drone::Table, Drone::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_load_drone_id")
                    .table(Load::Table)
                    .col(Load::DroneId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Load::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Load {
    Table,
    Id,
    Origin,
    Destination,
    CreatedAt,
    DroneId,
    WeightLoaded,
}
