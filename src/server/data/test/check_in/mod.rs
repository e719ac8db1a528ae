use crate::server::data::check_in::CheckInRepository;
use chrono::{TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_student;
