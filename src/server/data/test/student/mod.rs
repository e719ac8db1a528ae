use crate::server::{data::student::StudentRepository, model::student::UpdateStudentParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_email;
mod get_by_gym;
mod update;
