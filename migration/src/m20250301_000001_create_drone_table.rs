use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Drone::Table)
                    .if_not_exists()
                    .col(pk_auto(Drone::Id))
                    .col(string_len_uniq(Drone::SerialNumber, 100))
                    .col(string_len(Drone::Model, 16))
                    .col(
                        integer(Drone::WeightLimit)
                            .default(500)
                            .check(
                                Expr::col(Drone::WeightLimit)
                                    .gt(0)
                                    .and(Expr::col(Drone::WeightLimit).lte(500)),
                            ),
                    )
                    .col(
                        integer(Drone::BatteryCapacity)
                            .default(100)
                            .check(
                                Expr::col(Drone::BatteryCapacity)
                                    .gte(0)
                                    .and(Expr::col(Drone::BatteryCapacity).lte(100)),
                            ),
                    )
                    .col(string_len(Drone::State, 16))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Drone::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Drone {
    Table,
    Id,
    SerialNumber,
    Model,
    WeightLimit,
    BatteryCapacity,
    State,
}
