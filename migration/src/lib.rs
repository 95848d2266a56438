pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_drone_table;
mod m20250301_000002_create_medication_table;
mod m20250301_000003_create_load_table;
mod m20250301_000004_create_load_medication_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_drone_table::Migration),
            Box::new(m20250301_000002_create_medication_table::Migration),
            Box::new(m20250301_000003_create_load_table::Migration),
            Box::new(m20250301_000004_create_load_medication_table::Migration),
        ]
    }
}
