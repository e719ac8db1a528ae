use crate::server::{data::enrollment::EnrollmentRepository, model::enrollment::EnrollmentTerms};
use chrono::{Months, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod exists_for_student;
mod get_by_gym;
mod update;
