use crate::server::data::help_order::HelpOrderRepository;
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod answer;
mod find_by_id_in_gym;
mod get_unanswered_by_gym;
