use crate::server::{
    data::medication::MedicationRepository, model::medication::CreateMedicationParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_code;
mod get_by_load;
