use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Medication::Table)
                    .if_not_exists()
                    .col(pk_auto(Medication::Id))
                    .col(string(Medication::Name))
                    .col(integer(Medication::Weight).check(Expr::col(Medication::Weight).gt(0)))
                    .col(string_uniq(Medication::Code))
                    .col(string_null(Medication::Image))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Medication::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Medication {
    Table,
    Id,
    Name,
    Weight,
    Code,
    Image,
}
