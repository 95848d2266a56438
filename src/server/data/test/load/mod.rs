use crate::server::{
    data::load::LoadRepository,
    model::{load::CreateLoadParams, medication::Medication},
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_drone;
