use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_medication_table::Medication,
    m20250301_000003_create_load_table::Load,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LoadMedication::Table)
                    .if_not_exists()
                    .col(integer(LoadMedication::LoadId))
                    .col(integer(LoadMedication::MedicationId))
                    .col(integer(LoadMedication::Position))
                    .primary_key(
                        Index::create()
                            .col(LoadMedication::LoadId)
                            .col(LoadMedication::MedicationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_load_medication_load_id")
                            .from(LoadMedication::Table, LoadMedication::LoadId)
                            .to(Load::Table, Load::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_load_medication_medication_id")
                            .from(LoadMedication::Table, LoadMedication::MedicationId)
                            .to(Medication::Table, Medication::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LoadMedication::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LoadMedication {
    Table,
    LoadId,
    MedicationId,
    Position,
}
